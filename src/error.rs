//! Error types for simulation setup
//!
//! The per-tick physics never fails. Everything here is raised while
//! building bodies, arenas and scenarios, or while reading/writing files.

use thiserror::Error;

/// Result alias used across the crate
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while configuring a simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// A body with a non-positive or non-finite radius/mass
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Arena bounds that cannot contain the bodies
    #[error("invalid arena: {0}")]
    InvalidArena(String),

    /// Any other bad configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub fn invalid_body(details: impl Into<String>) -> Self {
        Self::InvalidBody(details.into())
    }

    pub fn invalid_arena(details: impl Into<String>) -> Self {
        Self::InvalidArena(details.into())
    }

    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}
