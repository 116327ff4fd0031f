use crate::position::Target;
use std::env;
use thiserror::Error;

pub const DEFAULT_CANDIDATE_TARGETS: [f64; 4] = [9.00, 8.75, 8.50, 8.25];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got '{0}'")]
    Port(String),
    #[error("CANDIDATE_TARGETS entry '{0}' is not a positive number")]
    CandidateTarget(String),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub log_level: String,
    pub candidate_targets: Vec<Target>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: 3000,
            log_level: "info".to_string(),
            candidate_targets: DEFAULT_CANDIDATE_TARGETS
                .iter()
                .copied()
                .map(Target::from)
                .collect(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("PORT").ok().as_deref(),
            env::var("LOG_LEVEL").ok().as_deref(),
            env::var("CANDIDATE_TARGETS").ok().as_deref(),
        )
    }

    fn from_vars(
        port: Option<&str>,
        log_level: Option<&str>,
        candidate_targets: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(port) = port {
            settings.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Port(port.to_string()))?;
        }
        if let Some(level) = log_level {
            settings.log_level = level.to_string();
        }
        if let Some(list) = candidate_targets {
            settings.candidate_targets = parse_targets(list)?;
        }

        Ok(settings)
    }
}

// Comma separated levels, kept in the order written
fn parse_targets(list: &str) -> Result<Vec<Target>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.parse::<f64>() {
            Ok(level) if level.is_finite() && level > 0.0 => Ok(Target::new(level)),
            _ => Err(ConfigError::CandidateTarget(entry.to_string())),
        })
        .collect()
}
