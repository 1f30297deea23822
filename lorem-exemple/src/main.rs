use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lorem_core::io::{read_snapshot_or_default, write_snapshot};
use lorem_core::{Lorem, Outcome};

/// Runs one lorem command and prints the result.
///
/// Examples:
/// - `lorem-exemple lorem_p3_medium`
/// - `lorem-exemple lorem w20 wrap40`
/// - `lorem-exemple --seed 7 lorem_ol5`
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Snapshot file (JSON) with defaults and delimiters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective snapshot to this file and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,

    /// The command, keyword included (ex. `lorem_p3`). Several arguments are joined with spaces.
    #[arg(default_value = "lorem")]
    command: Vec<String>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let snapshot = read_snapshot_or_default(args.config.as_ref())?;
    if let Some(path) = &args.dump_config {
        write_snapshot(path, &snapshot)?;
        println!("Snapshot written to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let lorem = Lorem::new(snapshot)?;
    let command = args.command.join(" ");

    let result = match args.seed {
        Some(seed) => lorem.execute_with_rng(&command, StdRng::seed_from_u64(seed)),
        None => lorem.execute(&command),
    };

    match result {
        Ok(Outcome::Text(text)) => println!("{text}"),
        // The host opens these; a terminal can only point at them.
        Ok(Outcome::OpenHelp(url)) => println!("Help: {url}"),
        Ok(Outcome::OpenSettings) => match &args.config {
            Some(path) => println!("Settings: {}", path.display()),
            None => println!("Settings: built-in defaults (use --config FILE, or --dump-config FILE to create one)"),
        },
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
