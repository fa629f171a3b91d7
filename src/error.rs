use thiserror::Error;

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the engine.
///
/// The default reading path never produces these: an unmapped key silently
/// falls back to the first registry entry unless [`crate::MissingEntry::Reject`]
/// is requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not six characters over `{0,1}`.
    #[error("invalid binary key '{0}' (expected six characters of 0/1)")]
    InvalidKey(String),

    /// The registry has no entry for a well-formed key.
    #[error("no registry entry for binary key {key}")]
    MissingEntry { key: String },

    #[error("unknown trigram '{0}'")]
    UnknownTrigram(String),
}
