//! `formwork login`: the login submission flow.
//!
//! Validate, stop with "Form validation failed" when invalid, otherwise hand
//! the credentials to the authenticator and report its verdict.

use anyhow::Result;
use clap::Args;
use formwork_form::{FieldSource, Form, FormValues, ValidationReport};
use formwork_validator::Rule;

use super::Outcome;
use crate::auth::{Authenticator, StaticUsers};
use crate::config::{AppConfig, LOGIN_FORM};
use crate::notify::{ConsoleNotifier, Notification, Notifier};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Password
    #[arg(long, default_value = "")]
    pub password: String,
}

pub fn run(args: &LoginArgs, config: &AppConfig) -> Result<Outcome> {
    let form = config.form(LOGIN_FORM)?;
    let values = FormValues::new()
        .with("email", args.email.as_str())
        .with("password", args.password.as_str());
    let users = StaticUsers::new(config.users.clone());

    let submission = submit(&form, &values, &users, &ConsoleNotifier);

    for (field, hint) in hints(&form, &submission.report) {
        println!("  {field}: {hint}");
    }

    Ok(submission.outcome)
}

/// What one submission produced. The report is what a view would render.
#[derive(Debug)]
pub struct Submission {
    pub report: ValidationReport,
    pub outcome: Outcome,
}

pub fn submit(
    form: &Form,
    values: &FormValues,
    auth: &dyn Authenticator,
    notifier: &dyn Notifier,
) -> Submission {
    let report = form.validate(values);

    if !report.is_valid() {
        notifier.notify(Notification::error("Form validation failed"));
        return Submission {
            report,
            outcome: Outcome::Rejected,
        };
    }

    let email = values.field_value("email").unwrap_or_default();
    let password = values.field_value("password").unwrap_or_default();

    let outcome = match auth.authenticate(&email, &password) {
        Ok(()) => {
            tracing::info!(%email, "access granted");
            notifier.notify(Notification::success("Access granted"));
            Outcome::Accepted
        }
        Err(error) => {
            tracing::info!(%email, %error, "authentication failed");
            notifier.notify(Notification::error(error.message()));
            Outcome::Rejected
        }
    };

    Submission { report, outcome }
}

/// The helper texts shown under invalid fields: one per failed rule, in
/// declaration order.
pub fn hints(form: &Form, report: &ValidationReport) -> Vec<(String, String)> {
    form.descriptor()
        .iter()
        .flat_map(|(field, rules)| {
            rules
                .iter()
                .filter(move |rule| report.failed(field, rule.name().as_str()))
                .map(move |rule| (field.to_string(), hint(field, rule)))
        })
        .collect()
}

fn hint(field: &str, rule: &Rule) -> String {
    let label = label(field);
    match rule.name().as_str() {
        "required" => format!("{label} is required"),
        "email" => "Invalid email format".to_string(),
        "minLength" => format!(
            "{label} should be at least {} characters",
            rule.param("min").unwrap_or("?")
        ),
        "maxLength" => format!(
            "{label} should be at most {} characters",
            rule.param("max").unwrap_or("?")
        ),
        "pattern" => format!("{label} has an invalid format"),
        other => format!("{label} failed `{other}`"),
    }
}

fn label(field: &str) -> String {
    let mut chars = field.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
