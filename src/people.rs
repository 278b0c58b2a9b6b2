use serde::{Deserialize, Serialize};

use crate::error::OutbreakError;

/// The compartment a person currently belongs to.
///
/// Only infected people can transmit the disease, and recovered people are
/// immune to reinfection.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfectionStatus {
    Susceptible,
    Infected,
    Recovered,
}

// Internal representation. Keeping the countdown inside the variant makes
// "infected with no remaining days" unrepresentable once a transition has
// settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HealthState {
    Susceptible,
    Infected { days_remaining: u32 },
    Recovered,
}

/// An individual in the population: a three-state machine that moves from
/// susceptible through infected to recovered, driven by `infect` and one
/// `advance_day` call per simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    state: HealthState,
}

impl Default for Person {
    fn default() -> Self {
        Person::new()
    }
}

impl Person {
    /// Creates a healthy, susceptible person.
    pub fn new() -> Self {
        Person {
            state: HealthState::Susceptible,
        }
    }

    /// Infects a susceptible person for `duration` days.
    ///
    /// The duration is validated before the state is examined, so a zero
    /// duration is rejected regardless of the person's current status.
    /// Attempts to infect someone who is already infected or recovered are
    /// silently ignored and leave the existing countdown untouched.
    ///
    /// # Errors
    ///
    /// Returns `OutbreakError::InvalidArgument` if `duration` is zero.
    pub fn infect(&mut self, duration: u32) -> Result<(), OutbreakError> {
        if duration == 0 {
            return Err(OutbreakError::InvalidArgument(
                "infection duration must be positive".to_string(),
            ));
        }
        if let HealthState::Susceptible = self.state {
            self.state = HealthState::Infected {
                days_remaining: duration,
            };
        }
        Ok(())
    }

    /// Progresses the infection by one day. An infected person whose
    /// countdown runs out becomes recovered; susceptible and recovered
    /// people are unaffected. The caller is responsible for invoking this
    /// exactly once per person per simulated day.
    pub fn advance_day(&mut self) {
        if let HealthState::Infected { days_remaining } = self.state {
            self.state = if days_remaining <= 1 {
                HealthState::Recovered
            } else {
                HealthState::Infected {
                    days_remaining: days_remaining - 1,
                }
            };
        }
    }

    pub fn is_susceptible(&self) -> bool {
        matches!(self.state, HealthState::Susceptible)
    }

    pub fn is_infected(&self) -> bool {
        matches!(self.state, HealthState::Infected { .. })
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self.state, HealthState::Recovered)
    }

    pub fn status(&self) -> InfectionStatus {
        match self.state {
            HealthState::Susceptible => InfectionStatus::Susceptible,
            HealthState::Infected { .. } => InfectionStatus::Infected,
            HealthState::Recovered => InfectionStatus::Recovered,
        }
    }

    /// Days left in the infectious period; zero for anyone not currently
    /// infected.
    pub fn remaining_infection_days(&self) -> u32 {
        match self.state {
            HealthState::Infected { days_remaining } => days_remaining,
            _ => 0,
        }
    }
}
