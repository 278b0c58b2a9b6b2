use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::OutbreakError;
use crate::people::{InfectionStatus, Person};

/// A fixed-size population of people and the engine that advances it one
/// simulated day at a time.
///
/// The population owns its members as a contiguous arena addressed by index,
/// a single random number generator for the whole run, and cached
/// compartment counts that always equal the partition of members by status.
pub struct Population {
    members: Vec<Person>,
    day: u32,

    susceptible_count: usize,
    infected_count: usize,
    recovered_count: usize,

    // Stored verbatim; bounds enforcement belongs to parameter validation.
    transmission_probability: f64,
    contacts_per_day: u32,
    infection_duration: u32,

    rng: StdRng,
}

impl Population {
    /// Creates a population of `size` susceptible people with a generator
    /// seeded from OS entropy.
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, StdRng::from_os_rng())
    }

    /// Creates a population of `size` susceptible people with a
    /// deterministic generator, so that identical seeds reproduce identical
    /// epidemic trajectories.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: usize, rng: StdRng) -> Self {
        Population {
            members: vec![Person::new(); size],
            day: 0,
            susceptible_count: size,
            infected_count: 0,
            recovered_count: 0,
            transmission_probability: 0.0,
            contacts_per_day: 0,
            infection_duration: 0,
            rng,
        }
    }

    pub fn set_transmission_probability(&mut self, probability: f64) {
        self.transmission_probability = probability;
    }

    pub fn set_contacts_per_day(&mut self, contacts: u32) {
        self.contacts_per_day = contacts;
    }

    pub fn set_infection_duration(&mut self, days: u32) {
        self.infection_duration = days;
    }

    /// Infects one member chosen uniformly at random from the whole
    /// population, not just the susceptibles. A draw that lands on someone
    /// already infected or recovered is a wasted seed; callers wanting an
    /// exact number of initial infections can check `infected_count`
    /// between calls.
    ///
    /// # Errors
    ///
    /// Returns `OutbreakError::InvalidArgument` if the configured infection
    /// duration is still zero, i.e. seeding before configuration.
    pub fn seed_random_infection(&mut self) -> Result<(), OutbreakError> {
        let index = self.rng.random_range(0..self.members.len());
        trace!("seeding infection at index {index}");
        self.members[index].infect(self.infection_duration)?;
        self.update_counts();
        Ok(())
    }

    /// Advances the simulation by one day.
    ///
    /// The day resolves in a fixed order so that member iteration order
    /// cannot change the outcome: transmission decisions are made first
    /// against start-of-day state, then every member's countdown progresses
    /// exactly once, and only then are the new infections applied. A person
    /// infected today therefore starts their full countdown tomorrow, and
    /// nobody can both recover and be reinfected within one day.
    ///
    /// # Errors
    ///
    /// Returns `OutbreakError::InvalidArgument` if a transmission fires
    /// while the configured infection duration is zero.
    pub fn advance_one_day(&mut self) -> Result<(), OutbreakError> {
        let size = self.members.len();
        let mut newly_exposed: Vec<usize> = Vec::new();

        // Contacts are drawn with replacement over the full index space, so
        // an infected member may contact itself or the same person twice.
        for member in &self.members {
            if !member.is_infected() {
                continue;
            }
            for _ in 0..self.contacts_per_day {
                let contact = self.rng.random_range(0..size);
                if self.members[contact].is_susceptible()
                    && self.rng.random::<f64>() <= self.transmission_probability
                {
                    newly_exposed.push(contact);
                }
            }
        }

        for member in &mut self.members {
            member.advance_day();
        }

        // `infect` ignores anyone no longer susceptible, so duplicate
        // entries in the exposure list resolve to a single infection.
        for index in newly_exposed {
            self.members[index].infect(self.infection_duration)?;
        }

        self.day += 1;
        self.update_counts();
        debug!(
            "day {} complete: S={} I={} R={}",
            self.day, self.susceptible_count, self.infected_count, self.recovered_count
        );
        Ok(())
    }

    fn update_counts(&mut self) {
        let mut susceptible = 0;
        let mut infected = 0;
        let mut recovered = 0;
        for member in &self.members {
            match member.status() {
                InfectionStatus::Susceptible => susceptible += 1,
                InfectionStatus::Infected => infected += 1,
                InfectionStatus::Recovered => recovered += 1,
            }
        }
        self.susceptible_count = susceptible;
        self.infected_count = infected;
        self.recovered_count = recovered;
    }

    pub fn current_day(&self) -> u32 {
        self.day
    }

    pub fn population_size(&self) -> usize {
        self.members.len()
    }

    pub fn susceptible_count(&self) -> usize {
        self.susceptible_count
    }

    pub fn infected_count(&self) -> usize {
        self.infected_count
    }

    pub fn recovered_count(&self) -> usize {
        self.recovered_count
    }

    pub fn transmission_probability(&self) -> f64 {
        self.transmission_probability
    }

    pub fn contacts_per_day(&self) -> u32 {
        self.contacts_per_day
    }

    pub fn infection_duration(&self) -> u32 {
        self.infection_duration
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_partition(population: &Population) {
        assert_eq!(
            population.susceptible_count()
                + population.infected_count()
                + population.recovered_count(),
            population.population_size()
        );
    }

    fn seeded(size: usize, seed: u64, probability: f64, contacts: u32, duration: u32) -> Population {
        let mut population = Population::with_seed(size, seed);
        population.set_transmission_probability(probability);
        population.set_contacts_per_day(contacts);
        population.set_infection_duration(duration);
        population
    }

    #[test]
    fn new_population_is_fully_susceptible() {
        let population = Population::new(25);
        assert_eq!(population.population_size(), 25);
        assert_eq!(population.susceptible_count(), 25);
        assert_eq!(population.infected_count(), 0);
        assert_eq!(population.recovered_count(), 0);
        assert_eq!(population.current_day(), 0);
        assert_partition(&population);
    }

    #[test]
    fn setters_store_parameters_verbatim() {
        let mut population = Population::new(1);
        population.set_transmission_probability(0.25);
        population.set_contacts_per_day(7);
        population.set_infection_duration(4);
        assert_eq!(population.transmission_probability(), 0.25);
        assert_eq!(population.contacts_per_day(), 7);
        assert_eq!(population.infection_duration(), 4);
    }

    #[test]
    fn seeding_infects_one_member_and_recounts() {
        let mut population = seeded(10, 42, 0.5, 2, 3);
        population.seed_random_infection().unwrap();
        assert_eq!(population.susceptible_count(), 9);
        assert_eq!(population.infected_count(), 1);
        assert_eq!(population.recovered_count(), 0);
        assert_partition(&population);
    }

    #[test]
    fn seeding_before_configuration_fails() {
        let mut population = Population::with_seed(10, 42);
        let result = population.seed_random_infection();
        assert!(matches!(result, Err(OutbreakError::InvalidArgument(_))));
        assert_eq!(population.infected_count(), 0);
        assert_eq!(population.susceptible_count(), 10);
    }

    #[test]
    fn repeated_seeding_never_exceeds_the_population() {
        let mut population = seeded(4, 7, 0.5, 2, 3);
        for _ in 0..20 {
            population.seed_random_infection().unwrap();
        }
        assert!(population.infected_count() <= 4);
        assert_partition(&population);
    }

    #[test]
    fn isolated_infection_recovers_on_schedule() {
        // One seeded infection with duration 3 and no contacts: infected
        // through days 0..=2, recovered on day 3.
        let mut population = seeded(10, 99, 0.5, 0, 3);
        population.seed_random_infection().unwrap();
        assert_eq!(
            (
                population.susceptible_count(),
                population.infected_count(),
                population.recovered_count()
            ),
            (9, 1, 0)
        );

        for expected_day in 1..=2 {
            population.advance_one_day().unwrap();
            assert_eq!(population.current_day(), expected_day);
            assert_eq!(
                (
                    population.susceptible_count(),
                    population.infected_count(),
                    population.recovered_count()
                ),
                (9, 1, 0)
            );
        }

        population.advance_one_day().unwrap();
        assert_eq!(population.current_day(), 3);
        assert_eq!(
            (
                population.susceptible_count(),
                population.infected_count(),
                population.recovered_count()
            ),
            (9, 0, 1)
        );
        assert_partition(&population);
    }

    #[test]
    fn single_person_population_recovers_alone() {
        // The only member can only contact itself, so the contact rate is
        // irrelevant.
        let mut population = seeded(1, 3, 1.0, 2, 5);
        population.seed_random_infection().unwrap();
        assert_eq!(population.infected_count(), 1);

        for _ in 0..4 {
            population.advance_one_day().unwrap();
            assert_eq!(population.infected_count(), 1);
        }
        population.advance_one_day().unwrap();
        assert_eq!(population.infected_count(), 0);
        assert_eq!(population.recovered_count(), 1);
        assert_partition(&population);
    }

    #[test]
    fn zero_contacts_means_no_spread() {
        let mut population = seeded(20, 11, 1.0, 0, 4);
        for _ in 0..3 {
            population.seed_random_infection().unwrap();
        }
        let initially_infected = population.infected_count();
        let initially_susceptible = population.susceptible_count();

        let mut previous_infected = initially_infected;
        for _ in 0..10 {
            population.advance_one_day().unwrap();
            assert!(population.infected_count() <= previous_infected);
            previous_infected = population.infected_count();
            assert_partition(&population);
        }
        assert_eq!(population.susceptible_count(), initially_susceptible);
        assert_eq!(population.recovered_count(), initially_infected);
    }

    #[test]
    fn zero_probability_means_no_contact_infections() {
        let mut population = seeded(20, 13, 0.0, 8, 4);
        population.seed_random_infection().unwrap();
        for _ in 0..10 {
            population.advance_one_day().unwrap();
            assert_partition(&population);
        }
        assert_eq!(population.susceptible_count(), 19);
        assert_eq!(population.recovered_count(), 1);
    }

    #[test]
    fn certain_transmission_spreads_from_the_first_day() {
        let mut population = seeded(8, 42, 1.0, 16, 10);
        population.seed_random_infection().unwrap();
        population.advance_one_day().unwrap();
        // Sixteen certain contacts from the one seeded member reach at
        // least one of the seven susceptibles.
        assert!(population.infected_count() > 1);
        assert_partition(&population);
    }

    #[test]
    fn identical_seeds_reproduce_identical_trajectories() {
        let mut first = seeded(50, 2024, 0.4, 3, 5);
        let mut second = seeded(50, 2024, 0.4, 3, 5);
        for _ in 0..2 {
            first.seed_random_infection().unwrap();
            second.seed_random_infection().unwrap();
        }

        for _ in 0..20 {
            first.advance_one_day().unwrap();
            second.advance_one_day().unwrap();
            assert_eq!(first.susceptible_count(), second.susceptible_count());
            assert_eq!(first.infected_count(), second.infected_count());
            assert_eq!(first.recovered_count(), second.recovered_count());
        }
    }

    #[test]
    fn recovered_count_never_decreases() {
        let mut population = seeded(30, 5, 0.6, 4, 2);
        population.seed_random_infection().unwrap();
        let mut previous_recovered = 0;
        for _ in 0..25 {
            population.advance_one_day().unwrap();
            assert!(population.recovered_count() >= previous_recovered);
            previous_recovered = population.recovered_count();
            assert_partition(&population);
        }
    }

    #[test]
    fn no_member_ends_a_day_with_a_stale_countdown() {
        let mut population = seeded(15, 8, 0.7, 3, 3);
        population.seed_random_infection().unwrap();
        for _ in 0..12 {
            population.advance_one_day().unwrap();
            for member in &population.members {
                assert_eq!(member.is_infected(), member.remaining_infection_days() > 0);
            }
        }
    }

    #[test]
    fn fresh_infections_start_their_full_countdown_the_next_day() {
        // Two members, certain transmission: the seeded member infects the
        // other on day 1, and the fresh infection must not lose a countdown
        // day to the same tick that created it.
        let mut population = seeded(2, 21, 1.0, 24, 3);
        population.seed_random_infection().unwrap();

        population.advance_one_day().unwrap();
        assert_eq!(population.infected_count(), 2);
        let fresh = population
            .members
            .iter()
            .find(|member| member.remaining_infection_days() == 3)
            .expect("the newly infected member keeps its full duration");
        assert!(fresh.is_infected());
    }
}
