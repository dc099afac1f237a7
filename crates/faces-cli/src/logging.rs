use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Level used until the configuration has been read
const STARTUP_LEVEL: &str = "info";

/// Install the global subscriber. The filter comes from `RUST_LOG` when set,
/// otherwise it starts at info and is replaced by the configured level.
pub fn init() -> FilterHandle {
    let directive = env_directive().unwrap_or_else(|| STARTUP_LEVEL.to_string());
    let (filter, handle) = reload::Layer::new(EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    handle
}

/// Apply `[general].log_level` unless `RUST_LOG` already decided
pub fn apply_config_level(handle: &FilterHandle, level: &str) {
    if env_directive().is_some() {
        return;
    }
    match set_level(handle, level) {
        Ok(()) => tracing::debug!("Log level set to {}", level),
        Err(e) => tracing::warn!("Keeping log level {}: {:#}", STARTUP_LEVEL, e),
    }
}

fn set_level(handle: &FilterHandle, level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{}'", level))?;
    handle.reload(filter).context("Failed to swap log filter")
}

fn env_directive() -> Option<String> {
    std::env::var("RUST_LOG").ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    fn max_level(handle: &FilterHandle) -> Option<LevelFilter> {
        handle.with_current(|filter| filter.max_level_hint()).unwrap()
    }

    #[test]
    fn test_configured_level_replaces_startup_filter() {
        let (layer, handle) = reload::Layer::<EnvFilter, Registry>::new(EnvFilter::new(STARTUP_LEVEL));
        assert_eq!(max_level(&handle), Some(LevelFilter::INFO));

        set_level(&handle, "debug").unwrap();
        assert_eq!(max_level(&handle), Some(LevelFilter::DEBUG));

        set_level(&handle, "faces_core=trace,warn").unwrap();
        assert_eq!(max_level(&handle), Some(LevelFilter::TRACE));

        drop(layer);
    }

    #[test]
    fn test_invalid_level_keeps_current_filter() {
        let (layer, handle) = reload::Layer::<EnvFilter, Registry>::new(EnvFilter::new(STARTUP_LEVEL));

        assert!(set_level(&handle, "faces_core=loud").is_err());
        assert_eq!(max_level(&handle), Some(LevelFilter::INFO));

        drop(layer);
    }
}
