//! # formwork-log
//!
//! Logging setup for programs hosting formwork forms.
//!
//! Library crates in this workspace only emit `tracing` events. A host
//! installs a subscriber once, at startup:
//!
//! ```rust,no_run
//! fn main() -> Result<(), formwork_log::LogError> {
//!     let _guard = formwork_log::auto_init()?;
//!
//!     formwork_log::info!(form = "login", "ready");
//!     Ok(())
//! }
//! ```
//!
//! `FORMWORK_LOG` (or `RUST_LOG`) sets the filter, `FORMWORK_LOG_FORMAT`
//! picks `pretty`, `compact` or `json`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, FORMAT_ENV, Format, LOG_ENV};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Pick a configuration from the environment and install it
///
/// - `FORMWORK_LOG` / `RUST_LOG` set: [`Config::from_env`]
/// - debug build: [`Config::development`]
/// - release build: [`Config::production`]
///
/// Returns a no-op guard when a global subscriber is already installed.
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var(LOG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
///
/// Returns a no-op guard when a global subscriber is already installed.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    LoggerBuilder::from_config(config).build()
}

/// Serializes global installs made by tests in this crate.
#[cfg(test)]
pub(crate) static TEST_INIT: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Initialize for tests
#[cfg(test)]
pub(crate) fn init_test() -> LogResult<LoggerGuard> {
    let _lock = TEST_INIT.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    init_with(Config::test())
}
