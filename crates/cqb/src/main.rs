//! cqb command line
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cqb types` | List every registered concrete type |
//! | `cqb check` | Load configuration and construct every bound capability |

// Force-link cqb-providers to ensure linkme registrations are included
extern crate cqb_providers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cqb_application::ports::registry::{list_available_types, validate_registry};
use cqb_infrastructure::config::ConfigLoader;
use cqb_infrastructure::di::{ServiceContext, install};
use cqb_infrastructure::logging::init_logging;

/// Command line interface for cqb
#[derive(Parser, Debug)]
#[command(name = "cqb")]
#[command(about = "Service registry with typed activation - inspect and check bindings")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do (defaults to `check`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List registered concrete types by kind
    Types,
    /// Construct every bound capability and report the outcome
    Check,
}

fn check(config: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;
    validate_registry()?;

    let context = install(ServiceContext::new(&config))?;
    let mut failed = 0;
    for (capability, outcome) in context.warm_up() {
        match outcome {
            Ok(provider) => println!("{capability}: {provider}"),
            Err(err) => {
                failed += 1;
                println!("{capability}: FAILED ({err})");
            }
        }
    }

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{failed} binding(s) failed");
        Ok(ExitCode::FAILURE)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Check) {
        Command::Types => {
            print!("{}", list_available_types());
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => check(cli.config),
    }
}
