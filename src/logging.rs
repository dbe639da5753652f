//! Severity-filtered loggers selected by deployment mode.
//!
//! The store core does not depend on this module; it exists for
//! embedding applications that want a message logger whose verbosity
//! follows the deployment context. Emission goes through `tracing`, so
//! the application's subscriber owns the actual sink and formatting.

use serde::{Deserialize, Serialize};

/// Deployment context used to select a logger variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployMode {
    Production,
    Development,
    Staging,
    /// Any deployment name not recognized as one of the named modes.
    Other,
}

impl DeployMode {
    /// Map a deployment-mode name to a mode.
    ///
    /// Unrecognized names fall back to [`DeployMode::Other`] rather than
    /// failing; callers that read the name from the environment get the
    /// default logger for free.
    pub fn from_name(name: &str) -> Self {
        match name {
            "production" => DeployMode::Production,
            "development" => DeployMode::Development,
            "staging" => DeployMode::Staging,
            _ => DeployMode::Other,
        }
    }
}

/// Severity-leveled message logger.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Production logger: info and debug are no-ops.
pub struct ProductionLogger;

impl Logger for ProductionLogger {
    fn info(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Development logger: every severity emits.
pub struct DevelopmentLogger;

impl Logger for DevelopmentLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Build the logger variant for a deployment mode.
///
/// Production gets the quiet [`ProductionLogger`]; development, staging,
/// and unrecognized modes all get the full-severity
/// [`DevelopmentLogger`].
pub fn logger_for(mode: DeployMode) -> Box<dyn Logger> {
    match mode {
        DeployMode::Production => Box::new(ProductionLogger),
        DeployMode::Development | DeployMode::Staging | DeployMode::Other => {
            Box::new(DevelopmentLogger)
        }
    }
}
