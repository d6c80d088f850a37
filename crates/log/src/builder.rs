//! Logger builder implementation

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful initialization
///
/// Holds the configuration the logger was installed with.
#[derive(Debug)]
pub struct LoggerGuard {
    config: Option<Config>,
}

impl LoggerGuard {
    /// A guard for a logger someone else installed.
    pub(crate) fn noop() -> Self {
        Self { config: None }
    }

    /// The configuration this guard's logger was built from, if it built one.
    #[must_use]
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }
}

/// Boxes a format layer, dropping timestamps unless `$time` is set.
macro_rules! with_timer {
    ($layer:expr, $time:expr) => {
        if $time {
            $layer.boxed()
        } else {
            $layer.without_time().boxed()
        }
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build the format layer for the configured output.
    fn fmt_layer(&self) -> BoxedLayer {
        let display = &self.config.display;
        let base = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids);

        match self.config.format {
            Format::Pretty => with_timer!(base.pretty(), display.time),
            Format::Compact => with_timer!(base.compact(), display.time),
            Format::Json => with_timer!(
                base.json()
                    .with_current_span(true)
                    .with_span_list(display.span_list)
                    .flatten_event(display.flatten),
                display.time
            ),
        }
    }

    /// Build and install the logger as the global default
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.config.filter()?;
        let layer = self.fmt_layer().with_filter(filter);

        Registry::default()
            .with(layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(level = %self.config.level, format = ?self.config.format, "logger initialized");
        Ok(LoggerGuard {
            config: Some(self.config),
        })
    }
}
