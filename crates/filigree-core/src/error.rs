// this_file: crates/filigree-core/src/error.rs

//! Error types for Filigree.
//!
//! The pipeline itself is total: unknown styles degrade to identity and
//! out-of-table characters pass through, so rendering never fails. Errors
//! only arise at the configuration and profile boundary.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FiligreeError>;

/// Main error type for Filigree.
#[derive(Debug, Error)]
pub enum FiligreeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Profile limit reached ({limit} profiles); delete one before adding \"{name}\"")]
    ProfileLimit { name: String, limit: usize },

    #[error("Profile store error: {0}")]
    ProfileStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
