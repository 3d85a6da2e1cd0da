//! `formwork`: validate form submissions from the command line.
//!
//! Exit codes: `0` valid (and authenticated, for `login`), `1` rejected,
//! `2` configuration or usage error.

mod auth;
mod commands;
mod config;
mod notify;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::Outcome;
use commands::login::LoginArgs;
use commands::validate::ValidateArgs;
use config::AppConfig;

#[derive(Parser)]
#[command(name = "formwork")]
#[command(version, about = "Declarative form validation", long_about = None)]
struct Cli {
    /// Configuration file (default: ./formwork.toml when present)
    #[arg(short, long, global = true, env = "FORMWORK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate JSON values against a form and print the report
    Validate(ValidateArgs),

    /// Submit the login form
    Login(LoginArgs),

    /// List configured forms
    Forms,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let _log = formwork_log::init_with(log_config(&config))?;
    tracing::debug!(forms = config.forms.len(), users = config.users.len(), "configuration loaded");

    match &cli.command {
        Commands::Validate(args) => commands::validate::run(args, &config),
        Commands::Login(args) => commands::login::run(args, &config),
        Commands::Forms => {
            commands::forms::run(&config);
            Ok(Outcome::Accepted)
        }
    }
}

/// `FORMWORK_LOG` / `RUST_LOG` win over the `[log]` table.
fn log_config(config: &AppConfig) -> formwork_log::Config {
    let from_env =
        std::env::var_os(formwork_log::LOG_ENV).is_some() || std::env::var_os("RUST_LOG").is_some();
    if from_env {
        formwork_log::Config::from_env()
    } else {
        config.log.clone()
    }
}
