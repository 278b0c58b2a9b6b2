use csv::Writer;
use serde_derive::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

use crate::error::OutbreakError;

/// One row of the daily prevalence report: the compartment sizes at the end
/// of `day` (day 0 is the state right after seeding).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrevalenceReportItem {
    pub day: u32,
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
}

/// CSV sink for the daily prevalence rows. Rows are flushed as they are
/// written so a partial file survives an aborted run.
pub struct PrevalenceReport {
    writer: Writer<File>,
}

impl PrevalenceReport {
    /// Opens the report file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if the path does not end in `.csv` or the
    /// file cannot be created.
    pub fn new(path: &Path) -> Result<Self, OutbreakError> {
        let file = create_report_file(path)?;
        Ok(PrevalenceReport {
            writer: Writer::from_writer(file),
        })
    }

    /// Appends one row and flushes it.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if serialization or the flush fails.
    pub fn record(&mut self, item: &PrevalenceReportItem) -> Result<(), OutbreakError> {
        self.writer.serialize(item)?;
        self.writer.flush()?;
        Ok(())
    }
}

// Checks that the path is valid. Creates the file and all parent
// directories if they do not exist.
fn create_report_file(path: &Path) -> Result<File, OutbreakError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            create_dir_all(path.parent().expect("either root or empty path provided"))?;
            let file = File::create(path)?;
            Ok(file)
        }
        _ => Err(OutbreakError::InvalidArgument(
            "report output files must be CSVs".to_string(),
        )),
    }
}

/// Writes the fixed-width console line for one day of the simulation.
pub fn print_daily_stats(item: &PrevalenceReportItem) {
    println!(
        "Day {:>3}: S={:>4}, I={:>4}, R={:>4}",
        item.day, item.susceptible, item.infected, item.recovered
    );
}
