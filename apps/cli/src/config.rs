//! Layered configuration: defaults, then `formwork.toml`, then `FORMWORK_*`
//! environment variables.
//!
//! ```toml
//! [log]
//! level = "info"
//! format = "compact"
//!
//! [forms.signup]
//! email = ["required", "email"]
//! password = ["required", { minLength = 8 }, { maxLength = 64 }]
//!
//! [[users]]
//! email = "user@example.com"
//! password = "secret1"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use formwork_form::{Form, FormDescriptor};
use formwork_validator::RuleSpec;
use indexmap::IndexMap;
use serde::Deserialize;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "formwork.toml";

/// Prefix for environment overrides, e.g. `FORMWORK_LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "FORMWORK_";

/// Name of the form that is always available.
pub const LOGIN_FORM: &str = "login";

/// Field name -> rule specs of one configured form.
pub type FormSpec = IndexMap<String, Vec<RuleSpec>>;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logger settings.
    pub log: formwork_log::Config,
    /// Named form descriptors.
    pub forms: BTreeMap<String, FormSpec>,
    /// Accounts accepted by the `login` command.
    pub users: Vec<UserRecord>,
}

/// One account of the static user table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                ensure!(path.is_file(), "config file `{}` does not exist", path.display());
                Toml::file(path)
            }
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        let env = Env::prefixed(ENV_PREFIX)
            .split("__")
            // Read by formwork-log and clap directly.
            .ignore(&["log", "log_format", "config"]);

        let mut config: Self = Figment::new()
            .merge(file)
            .merge(env)
            .extract()
            .context("failed to load configuration")?;

        config
            .forms
            .entry(LOGIN_FORM.to_string())
            .or_insert_with(login_form_spec);

        Ok(config)
    }

    /// Builds the named form, running the usual construction checks.
    pub fn form(&self, name: &str) -> Result<Form> {
        let Some(spec) = self.forms.get(name) else {
            let known: Vec<&str> = self.forms.keys().map(String::as_str).collect();
            bail!("unknown form `{name}` (configured: {})", known.join(", "));
        };

        let descriptor =
            FormDescriptor::from_specs(spec.iter().map(|(field, rules)| (field.as_str(), rules)))
                .with_context(|| format!("form `{name}` is misconfigured"))?;

        Form::new(descriptor).with_context(|| format!("form `{name}` is misconfigured"))
    }
}

/// `email: [required, email]`, `password: [required, minLength(6)]`.
pub fn login_form_spec() -> FormSpec {
    IndexMap::from([
        ("email".to_string(), vec![RuleSpec::Required, RuleSpec::Email]),
        (
            "password".to_string(),
            vec![RuleSpec::Required, RuleSpec::MinLength(6)],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_login_form_without_file() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.forms.keys().collect::<Vec<_>>(), ["login"]);
            assert!(config.users.is_empty());

            let form = config.form(LOGIN_FORM).map_err(|e| e.to_string())?;
            assert_eq!(form.descriptor().rule_count(), 4);
            Ok(())
        });
    }

    #[test]
    fn reads_forms_users_and_log_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    [log]
                    level = "warn"
                    format = "json"

                    [forms.signup]
                    email = ["required", "email"]
                    password = ["required", { minLength = 8 }]

                    [[users]]
                    email = "user@example.com"
                    password = "secret1"
                "#,
            )?;

            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.log.level, "warn");
            assert_eq!(config.log.format, formwork_log::Format::Json);
            assert_eq!(config.forms.keys().collect::<Vec<_>>(), ["login", "signup"]);
            assert_eq!(
                config.forms["signup"]["password"],
                vec![RuleSpec::Required, RuleSpec::MinLength(8)]
            );
            assert_eq!(config.users[0].email, "user@example.com");
            Ok(())
        });
    }

    #[test]
    fn file_can_override_login_form() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "[forms.login]\nemail = [\"required\"]\n")?;
            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.forms["login"].len(), 1);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "[log]\nlevel = \"warn\"\n")?;
            jail.set_env("FORMWORK_LOG__LEVEL", "debug");
            jail.set_env("FORMWORK_LOG", "trace");

            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let error = AppConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(error.to_string().contains("nope.toml"));
            Ok(())
        });
    }

    #[test]
    fn unknown_form_lists_configured_ones() {
        let config = AppConfig {
            forms: BTreeMap::from([(LOGIN_FORM.to_string(), login_form_spec())]),
            ..AppConfig::default()
        };
        let error = config.form("signup").unwrap_err();
        assert_eq!(error.to_string(), "unknown form `signup` (configured: login)");
    }

    #[test]
    fn misconfigured_form_is_rejected() {
        let config = AppConfig {
            forms: BTreeMap::from([(
                "broken".to_string(),
                IndexMap::from([("email".to_string(), Vec::new())]),
            )]),
            ..AppConfig::default()
        };
        let error = config.form("broken").unwrap_err();
        assert_eq!(error.to_string(), "form `broken` is misconfigured");
        assert!(format!("{error:#}").contains("has no rules"));
    }
}
