//! `formwork validate`: run a configured form over JSON values.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use formwork_form::ValidationReport;

use super::Outcome;
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Form to validate against
    #[arg(short, long, default_value = crate::config::LOGIN_FORM)]
    pub form: String,

    /// Values as a JSON object
    #[arg(long, conflicts_with = "file")]
    pub values: Option<String>,

    /// Read values from a JSON file (default: stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: &ValidateArgs, config: &AppConfig) -> Result<Outcome> {
    let form = config.form(&args.form)?;

    let raw = match (&args.values, &args.file) {
        (Some(values), _) => values.clone(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read values from stdin")?;
            buffer
        }
    };

    let values: serde_json::Value =
        serde_json::from_str(&raw).context("values are not valid JSON")?;
    let report = form
        .validate_json(&values)
        .with_context(|| format!("cannot validate form `{}`", args.form))?;

    println!("{}", render(&report, args.pretty)?);

    Ok(Outcome::from_validity(report.is_valid()))
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

fn render(report: &ValidationReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("failed to serialize report")
}
