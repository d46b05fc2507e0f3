mod batch;

use std::{fmt::Display, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use complex_lib::utils::ComplexNumber;
use serde::Serialize;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Digits after the decimal point in text output
    #[arg(short, long, global = true, default_value_t = 5)]
    precision: usize,
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Add(AddCommand),
    Abs(AbsCommand),
    Reciprocal(ReciprocalCommand),
    Batch(BatchCommand),
}

/// Adds two complex numbers written as `a+bi`
#[derive(Args)]
struct AddCommand {
    #[arg(allow_hyphen_values = true)]
    lhs: ComplexNumber,
    #[arg(allow_hyphen_values = true)]
    rhs: ComplexNumber,
}

/// Prints the distance of a complex number from the origin
#[derive(Args)]
struct AbsCommand {
    #[arg(allow_hyphen_values = true)]
    value: ComplexNumber,
}

/// Prints `1 / value`
#[derive(Args)]
struct ReciprocalCommand {
    #[arg(allow_hyphen_values = true)]
    value: ComplexNumber,
}

/// Evaluates a json file with an array of operations
#[derive(Args)]
struct BatchCommand {
    file: PathBuf,
}

/// Text with `--precision` digits, or a json value with `--json`
fn render<T: Display + Serialize>(value: T, cli: &Cli) -> anyhow::Result<String> {
    if cli.json {
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(format!("{:.*}", cli.precision, value))
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Add(command) => {
            tracing::debug!(lhs = %command.lhs, rhs = %command.rhs, "add");
            render(command.lhs + command.rhs, cli)
        }
        Command::Abs(command) => {
            tracing::debug!(value = %command.value, "abs");
            render(command.value.abs().get(), cli)
        }
        Command::Reciprocal(command) => {
            tracing::debug!(value = %command.value, "reciprocal");
            render(command.value.reciprocal()?, cli)
        }
        Command::Batch(command) => {
            let outcomes = batch::run_file(&command.file)?;
            Ok(serde_json::to_string_pretty(&outcomes)?)
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
