//! `idict` - parse the Igala dictionary source and browse the result
//!
//! Run with: `cargo run -p idict-cli -- --help`

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use idict_config::Config;
use idict_config::logging::{init_logging, report_ignored};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "idict")]
#[command(about = "Igala-English dictionary tools")]
struct Cli {
    /// JSON config file; IDICT_* environment variables still apply
    #[arg(long, global = true, env = "IDICT_CONFIG")]
    config: Option<PathBuf>,

    /// Parsed dataset, overrides config
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the plain-text source document into the JSON dataset
    Parse {
        /// Source document, defaults to the configured source path
        input: Option<PathBuf>,
        /// Output file, defaults to the configured dataset path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List words under a letter, or search all words for a term
    Lookup {
        #[arg(short, long)]
        letter: Option<String>,
        term: Option<String>,
    },
    /// Print the letters that have entries
    Letters,
    /// Show the details of one entry
    Show { headword: String },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (mut config, ignored) = Config::resolve(cli.config.as_deref())?;
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }

    init_logging(config.log_format, "warn");
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    report_ignored(&ignored);

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Parse { input, output } => {
            let input = input.unwrap_or(config.dataset.source_path);
            let output = output.unwrap_or(config.dataset.path);
            commands::parse(&input, &output, &mut out)?;
        }
        Command::Lookup { letter, term } => {
            let dict = commands::load(&config.dataset.path)?;
            commands::lookup(&dict, letter.as_deref(), term.as_deref(), &mut out)?;
        }
        Command::Letters => {
            let dict = commands::load(&config.dataset.path)?;
            commands::letters(&dict, &mut out)?;
        }
        Command::Show { headword } => {
            let dict = commands::load(&config.dataset.path)?;
            if !commands::show(&dict, &headword, &mut out)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
