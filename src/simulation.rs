use log::info;

use crate::error::OutbreakError;
use crate::parameters::Parameters;
use crate::population::Population;
use crate::report::{print_daily_stats, PrevalenceReport, PrevalenceReportItem};

/// The orchestrator: validates a configuration, wires it into a
/// `Population`, seeds the index cases, and drives the day loop until the
/// horizon is reached or the epidemic dies out.
pub struct Simulation {
    parameters: Parameters,
    population: Population,
    report: Option<PrevalenceReport>,
}

/// Final compartment sizes of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSummary {
    pub population_size: usize,
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
    pub days_simulated: u32,
}

impl SimulationSummary {
    /// Everyone who was ever infected, i.e. everyone no longer susceptible.
    pub fn total_affected(&self) -> usize {
        self.population_size - self.susceptible
    }

    /// Fraction of the population ever infected over the run.
    pub fn attack_rate(&self) -> f64 {
        self.total_affected() as f64 / self.population_size as f64
    }
}

impl Simulation {
    /// Builds a simulation from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `OutbreakError::ConfigurationError` if the parameters fail
    /// their validity predicate.
    pub fn new(parameters: Parameters) -> Result<Self, OutbreakError> {
        parameters.validate()?;

        let mut population = match parameters.random_seed {
            Some(seed) => Population::with_seed(parameters.population_size, seed),
            None => Population::new(parameters.population_size),
        };
        population.set_transmission_probability(parameters.infection_probability);
        population.set_contacts_per_day(parameters.contacts_per_day);
        population.set_infection_duration(parameters.infection_duration);

        Ok(Simulation {
            parameters,
            population,
            report: None,
        })
    }

    /// Attaches a CSV sink that receives every daily row alongside the
    /// console output.
    pub fn with_report(mut self, report: PrevalenceReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    // Seeds are drawn over the whole population, so a draw may land on an
    // already infected member and be wasted.
    fn seed_initial_infections(&mut self) -> Result<(), OutbreakError> {
        for _ in 0..self.parameters.initial_infections {
            self.population.seed_random_infection()?;
        }
        Ok(())
    }

    fn record_day(&mut self) -> Result<(), OutbreakError> {
        let item = PrevalenceReportItem {
            day: self.population.current_day(),
            susceptible: self.population.susceptible_count(),
            infected: self.population.infected_count(),
            recovered: self.population.recovered_count(),
        };
        print_daily_stats(&item);
        if let Some(report) = self.report.as_mut() {
            report.record(&item)?;
        }
        Ok(())
    }

    /// Runs the simulation to completion and returns the summary.
    ///
    /// Day 0 is reported right after seeding; every subsequent day is
    /// reported after its advancement. The loop stops early once no
    /// infected members remain.
    ///
    /// # Errors
    ///
    /// Propagates any seeding, advancement, or report-writing failure.
    pub fn run(&mut self) -> Result<SimulationSummary, OutbreakError> {
        info!("starting simulation: {}", self.parameters);
        self.seed_initial_infections()?;
        self.record_day()?;

        for _ in 1..=self.parameters.simulation_days {
            self.population.advance_one_day()?;
            self.record_day()?;

            if self.population.infected_count() == 0 {
                println!();
                println!(
                    "*** Epidemic ended on day {} ***",
                    self.population.current_day()
                );
                break;
            }
        }

        info!("simulation finished after {} days", self.population.current_day());
        Ok(self.summary())
    }

    fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            population_size: self.population.population_size(),
            susceptible: self.population.susceptible_count(),
            infected: self.population.infected_count(),
            recovered: self.population.recovered_count(),
            days_simulated: self.population.current_day(),
        }
    }
}
