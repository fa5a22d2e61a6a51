use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;

use computor::compute;

#[derive(Parser)]
#[command(name = "computor", version)]
#[command(about = "Reduce and solve a polynomial equation of degree 2 or less", long_about = None)]
struct Cli {
    /// Equation to solve, e.g. "5 * X^0 + 4 * X^1 = 4 * X^0"
    #[arg(value_name = "EQUATION", allow_hyphen_values = true)]
    equation: String,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli.equation) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(equation: &str) -> Result<()> {
    let report = compute(equation)?;

    println!("Reduced form: {}", report.reduced_form);
    println!("Polynomial degree: {}", report.degree);
    println!();
    println!("Solving steps:");
    for line in report.steps() {
        println!("{line}");
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
