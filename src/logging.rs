//! Diagnostic logging setup.
//!
//! Diagnostics go through `tracing`; the filter comes from `RUST_LOG` and
//! falls back to [`DEFAULT_FILTER`]. Output is written to stderr.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "guildhall_client=info";

/// Build the filter from the environment or the default.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    subscriber(env_filter(), std::io::stderr).try_init()
}
