//! Error types for the guildcal core.

use thiserror::Error;

/// Errors that can occur at the core's boundaries (import, serialization).
///
/// The reducer itself never returns errors: domain-rule rejections are
/// communicated through error toasts in the returned state.
#[derive(Error, Debug)]
pub enum GuildCalError {
    #[error("Import error: {0}")]
    Import(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for guildcal core operations.
pub type GuildCalResult<T> = Result<T, GuildCalError>;
