//! Logger builder implementation

use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

type Base = tracing_subscriber::layer::Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Base> + Send + Sync + 'static>;

/// Applies the shared display options to a fmt layer and boxes it.
/// `without_time` changes the layer type, hence the two boxed branches.
macro_rules! create_fmt_layer {
    ($layer:expr, $display:expr) => {{
        let display = $display;
        let layer = $layer
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_writer(std::io::stderr);
        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered
///
/// Drop it when the program ends; events emitted after the drop are still
/// logged, only without the root span.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the filter directive cannot be parsed
    /// - a global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let display = &self.config.display;
        let fmt_layer: BoxedLayer = match self.config.format {
            Format::Pretty => create_fmt_layer!(tracing_subscriber::fmt::layer().pretty(), display),
            Format::Compact => {
                create_fmt_layer!(tracing_subscriber::fmt::layer().compact(), display)
            }
            Format::Json => create_fmt_layer!(
                tracing_subscriber::fmt::layer().json().flatten_event(true),
                display
            ),
        };

        Registry::default()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}

impl LoggerGuard {
    /// A guard that holds nothing, returned when logging was already set up.
    pub(crate) fn noop() -> Self {
        Self { _root_span: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_rejected_before_install() {
        let result = LoggerBuilder::from_config(Config::test().with_level("formwork=loud")).build();
        assert!(matches!(result, Err(LogError::Filter { ref filter, .. }) if filter == "formwork=loud"));
    }

    #[test]
    fn test_init_is_idempotent() {
        let _first = crate::init_test().unwrap();
        let _second = crate::init_test().unwrap();
        tracing::info!("logged through the test subscriber");
    }
}
