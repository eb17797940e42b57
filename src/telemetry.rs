use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Compose the bunyan JSON subscriber used by the service.
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set.
pub fn get_subscriber<Sink>(
    name: String,
    default_filter: &str,
    sink: Sink,
) -> impl tracing::Subscriber + Send + Sync + use<Sink>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name, sink))
}

/// Install `subscriber` as the global default and route `log` records to it.
/// Fails if called more than once.
pub fn init_subscriber(
    subscriber: impl tracing::Subscriber + Send + Sync,
) -> Result<(), anyhow::Error> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
