use std::fmt::{self, Display};
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OutbreakError;

/// Simulation parameters, loadable from a JSON file. Missing fields fall
/// back to the defaults, which describe a moderate respiratory outbreak:
/// a population of 1000, five index cases, a 90 day horizon, a 50% chance
/// of transmission per contact, six contacts per infected person per day,
/// and a five day infectious period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    #[serde(default = "default_initial_infections")]
    pub initial_infections: usize,
    #[serde(default = "default_simulation_days")]
    pub simulation_days: u32,
    #[serde(default = "default_infection_probability")]
    pub infection_probability: f64,
    #[serde(default = "default_contacts_per_day")]
    pub contacts_per_day: u32,
    #[serde(default = "default_infection_duration")]
    pub infection_duration: u32,
    /// Seed for the run's random source. `None` draws fresh OS entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_population_size() -> usize {
    1000
}

fn default_initial_infections() -> usize {
    5
}

fn default_simulation_days() -> u32 {
    90
}

fn default_infection_probability() -> f64 {
    0.5
}

fn default_contacts_per_day() -> u32 {
    6
}

fn default_infection_duration() -> u32 {
    5
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            population_size: default_population_size(),
            initial_infections: default_initial_infections(),
            simulation_days: default_simulation_days(),
            infection_probability: default_infection_probability(),
            contacts_per_day: default_contacts_per_day(),
            infection_duration: default_infection_duration(),
            random_seed: None,
        }
    }
}

impl Parameters {
    /// Reads parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if the file cannot be opened or parsed.
    pub fn load_from_json(path: &Path) -> Result<Self, OutbreakError> {
        let file = File::open(path)?;
        let parameters = serde_json::from_reader(file)?;
        Ok(parameters)
    }

    /// Checks the validity predicate for a runnable configuration and
    /// reports the first violated constraint.
    ///
    /// # Errors
    ///
    /// Returns `OutbreakError::ConfigurationError` naming the offending
    /// field.
    pub fn validate(&self) -> Result<(), OutbreakError> {
        if self.population_size == 0 {
            return Err(OutbreakError::ConfigurationError(
                "population_size must be positive".to_string(),
            ));
        }
        if self.initial_infections == 0 {
            return Err(OutbreakError::ConfigurationError(
                "initial_infections must be positive".to_string(),
            ));
        }
        if self.initial_infections > self.population_size {
            return Err(OutbreakError::ConfigurationError(
                "initial_infections cannot exceed population_size".to_string(),
            ));
        }
        if self.simulation_days == 0 {
            return Err(OutbreakError::ConfigurationError(
                "simulation_days must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.infection_probability) {
            return Err(OutbreakError::ConfigurationError(
                "infection_probability must be between 0 and 1".to_string(),
            ));
        }
        if self.infection_duration == 0 {
            return Err(OutbreakError::ConfigurationError(
                "infection_duration must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "population: {}, initial infections: {}, days: {}, \
             infection probability: {:.2}, contacts/day: {}, duration: {} days",
            self.population_size,
            self.initial_infections,
            self.simulation_days,
            self.infection_probability,
            self.contacts_per_day,
            self.infection_duration
        )
    }
}
