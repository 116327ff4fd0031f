use anyhow::anyhow;
use std::env;
use tracing_subscriber::filter::{EnvFilter, ParseError};

// An explicit RUST_LOG replaces the configured level entirely
fn filter(rust_log: Option<&str>, log_level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(rust_log.unwrap_or(log_level))
}

pub fn init_logging(log_level: &str) -> anyhow::Result<()> {
    let rust_log = env::var("RUST_LOG").ok();
    let filter = filter(rust_log.as_deref(), log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Cannot install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_rust_log() {
        assert!(filter(None, "debug").is_ok());
        assert!(filter(None, "averager=trace,axum=warn").is_ok());
    }

    #[test]
    fn rust_log_takes_precedence() {
        // the configured value is never parsed once RUST_LOG is present
        assert!(filter(Some("info"), "averager=loud").is_ok());
    }

    #[test]
    fn unknown_level_is_an_error() {
        assert!(filter(None, "averager=loud").is_err());
    }
}
