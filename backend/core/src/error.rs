use thiserror::Error;

/// Error taxonomy for the NutriScan loaders and collaborators.
///
/// The analysis pipeline itself is total over its input domain and never
/// returns these; they surface from knowledge-base loading, which does
/// real I/O.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("knowledge base unavailable: {0}")]
    KbUnavailable(String),

    #[error("malformed ingredient record '{name}': {reason}")]
    MalformedRecord { name: String, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
