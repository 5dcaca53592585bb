use std::path::PathBuf;

use anyhow::Result;
use casegen::{GenConfig, Mode, RunReport, Settings, load_settings};
use clap::Parser;
use colored::Colorize;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = cli.settings();
    if let Some(path) = &cli.config {
        settings = settings.or(load_settings(path)?);
    }
    let config = GenConfig::resolve(settings)?;

    let report = casegen::run(&config)?;
    if let Some(path) = &cli.report {
        report.write(path)?;
    }
    if !cli.quiet {
        print_summary(&report);
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    name = "casegen",
    version,
    about = "Generate randomized echo/sum test inputs with expected outputs"
)]
struct Cli {
    /// Number of cases to generate [default: 1000]
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Case kind [default: sum]
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,
    /// Smallest value that may be sampled [default: mode preset]
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,
    /// Largest value that may be sampled [default: mode preset]
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,
    /// File to write [default: inputs.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Seed for the random source [default: current time in seconds]
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file supplying any option not given on the command line
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write a JSON run report here
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            count: self.count,
            mode: self.mode,
            min: self.min,
            max: self.max,
            output: self.output.clone(),
            seed: self.seed,
        }
    }
}

fn print_summary(report: &RunReport) {
    println!(
        "{} {} {} cases in [{}, {}] (seed {}) -> {} in {} ms",
        "generated".green().bold(),
        report.count,
        report.mode.as_str(),
        report.min,
        report.max,
        report.seed.to_string().cyan(),
        report.output.display(),
        report.duration_ms
    );
}
