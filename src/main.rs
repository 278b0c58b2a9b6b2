use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use outbreak::error::OutbreakError;
use outbreak::log::init_logging;
use outbreak::parameters::Parameters;
use outbreak::report::PrevalenceReport;
use outbreak::simulation::Simulation;

#[derive(Parser, Debug)]
#[command(name = "outbreak", version, about = "Agent-based SIR epidemic simulator")]
struct Args {
    /// Optional path to a JSON parameters file; defaults are used when
    /// omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed; a fresh one is drawn from the OS when omitted
    #[arg(short, long)]
    random_seed: Option<u64>,

    /// Optional directory for report output
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "off")]
    log_level: LevelFilter,
}

fn try_main(args: &Args) -> Result<(), OutbreakError> {
    let mut parameters = match &args.config {
        Some(path) => Parameters::load_from_json(path)?,
        None => Parameters::default(),
    };
    // The command line seed takes precedence over the config file.
    if let Some(seed) = args.random_seed {
        parameters.random_seed = Some(seed);
    }

    println!("=== SIR Epidemic Simulation ===");
    println!("{parameters}");
    println!();

    let mut simulation = Simulation::new(parameters)?;
    if let Some(output_dir) = &args.output_dir {
        let report = PrevalenceReport::new(&output_dir.join("prevalence.csv"))?;
        simulation = simulation.with_report(report);
    }

    let summary = simulation.run()?;

    let population = summary.population_size as f64;
    println!();
    println!("=== Final Statistics ===");
    println!(
        "Susceptible: {} ({:.1}%)",
        summary.susceptible,
        100.0 * summary.susceptible as f64 / population
    );
    println!(
        "Recovered: {} ({:.1}%)",
        summary.recovered,
        100.0 * summary.recovered as f64 / population
    );
    println!(
        "Total Affected: {} ({:.1}%)",
        summary.total_affected(),
        100.0 * summary.attack_rate()
    );
    println!("Attack Rate: {:.1}%", 100.0 * summary.attack_rate());
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level);

    if let Err(error) = try_main(&args) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
