//! An agent-based simulation of epidemic spread through a fixed population
//!
//! `outbreak` models a contagious disease with the compartmental
//! Susceptible-Infected-Recovered ("SIR") approach. Every individual is a
//! small state machine, and a population-level engine advances all of them
//! one simulated day at a time: each infected person draws a configurable
//! number of random contacts, each contact with a susceptible person may
//! transmit the disease, every infection counts down to recovery, and the
//! three compartments are recounted at the end of the day.
//!
//! In practice a run consists of a few modules working together:
//! * `parameters` loads and validates the simulation configuration.
//! * `people` defines the per-individual state machine.
//! * `population` owns the individuals and implements the day-advance
//!   engine: random seeding, contact-based transmission, and state
//!   progression.
//! * `simulation` wires configuration into a population, seeds the index
//!   cases, and drives the day loop until the horizon or the end of the
//!   epidemic.
//! * `report` writes the daily compartment counts to the console and,
//!   optionally, to a CSV file.
pub mod error;
pub mod log;
pub mod parameters;
pub mod people;
pub mod population;
pub mod report;
pub mod simulation;

pub use error::OutbreakError;
pub use parameters::Parameters;
pub use people::{InfectionStatus, Person};
pub use population::Population;
pub use simulation::{Simulation, SimulationSummary};
