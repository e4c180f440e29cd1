use std::io;

use bazi_pillars::{CalculatorConfig, Reading, render_text};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "bazi",
    allow_negative_numbers = true,
    about = "Four pillars (bazi) and five-element profile of a birth date and hour"
)]
struct Cli {
    /// Birth year (Gregorian)
    year: i32,
    /// Birth month (1-12)
    month: u32,
    /// Birth day (1-31)
    day: u32,
    /// Birth hour (0-23)
    hour: u32,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
    /// Always use the approximate arithmetic, ignoring any converter
    #[arg(long)]
    approximate: bool,
    /// External calendar converter command (overrides BAZI_CALENDAR_CMD)
    #[arg(long, value_name = "CMD")]
    calendar_cmd: Option<String>,
}

fn init_logging() {
    // stdout carries the report; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config =
        CalculatorConfig::from_env().with_overrides(cli.calendar_cmd.clone(), cli.approximate);
    debug!(?config, "calculator configuration");
    let calc = config.build();

    let pillars = match calc.compute(cli.year, cli.month, cli.day, cli.hour) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let reading = Reading::from_pillars(pillars);

    if cli.json {
        match reading.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_text(&reading));
    }
}
