//! Console logging, configured through CLI arguments and environment
//! variables.

use snafu::{ResultExt as _, Snafu};
use tracing::{level_filters::LevelFilter, subscriber::SetGlobalDefaultError};
use tracing_subscriber::{EnvFilter, Layer, Registry, filter::Directive, layer::SubscriberExt};

/// The environment variable used to override the default log level, for
/// example `K8S_VERSION_PRIORITY_LOG=debug`.
pub const LOG_ENV_VAR: &str = "K8S_VERSION_PRIORITY_LOG";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("unable to set the global default subscriber"))]
    SetGlobalDefaultSubscriber { source: SetGlobalDefaultError },
}

#[derive(Debug, PartialEq, Eq, clap::Args)]
pub struct LogOptions {
    /// Output format of log events, which are always written to stderr.
    #[arg(long, env = "K8S_VERSION_PRIORITY_LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}

/// Console log event output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Plain unstructured output.
    #[default]
    Plain,

    /// One JSON object per event.
    Json,
}

/// Settings for the console log subscriber.
#[derive(Debug, PartialEq, Eq)]
pub struct ConsoleLogSettings {
    /// The environment variable used to set the [`LevelFilter`]. When set, it
    /// overrides [`Self::default_level`].
    pub environment_variable: &'static str,

    /// The [`LevelFilter`] to fall back to.
    pub default_level: LevelFilter,

    pub log_format: LogFormat,
}

impl Default for ConsoleLogSettings {
    fn default() -> Self {
        Self {
            environment_variable: LOG_ENV_VAR,
            default_level: LevelFilter::INFO,
            log_format: LogFormat::default(),
        }
    }
}

impl From<&LogOptions> for ConsoleLogSettings {
    fn from(options: &LogOptions) -> Self {
        Self {
            log_format: options.log_format,
            ..Default::default()
        }
    }
}

impl ConsoleLogSettings {
    /// Installs the console subscriber as the global default.
    pub fn init(&self) -> Result<(), Error> {
        let env_filter = env_filter_builder(self.environment_variable, self.default_level);

        let layer = match self.log_format {
            LogFormat::Plain => tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter)
                .boxed(),
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_filter(env_filter)
                .boxed(),
        };

        tracing::subscriber::set_global_default(Registry::default().with(layer))
            .context(SetGlobalDefaultSubscriberSnafu)?;

        tracing::debug!(log_format = %self.log_format, "initialized console logging");
        Ok(())
    }
}

/// Create an [`EnvFilter`] configured with the given environment variable and default [`Directive`].
fn env_filter_builder(env_var: &str, default_directive: impl Into<Directive>) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(env_var)
        .with_default_directive(default_directive.into())
        .from_env_lossy()
}
