//! Error kinds surfaced by [`DocsClient`](super::DocsClient)
//!
//! Operations that can legitimately miss (metadata lookup by id) return an
//! `Option` instead of an error; these kinds cover everything else.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A query, fetch, or format operation ran before a successful
    /// `initialize()`.
    #[error("client not initialized - call initialize() first")]
    Uninitialized,

    /// A manifest retrieval failed or its body did not parse.
    #[error("failed to load {url}: {reason}")]
    Load { url: String, reason: String },

    /// A full-documentation fetch was requested for an id absent from the
    /// index.
    #[error("library not found: {id}")]
    NotFound { id: String },

    /// A documentation body retrieval was unsuccessful.
    #[error("failed to fetch docs for {id}: {reason}")]
    Fetch { id: String, reason: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}
