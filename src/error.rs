//! Error taxonomy for the concert search pipeline.
//!
//! Upstream failures are represented as explicit kinds so callers can
//! pattern-match instead of inspecting strings. A performer without a Spotify
//! match is not an error at all; that case is carried as absent optional
//! fields on [`crate::types::ResolvedPerformer`].

use thiserror::Error;

/// Failure kinds surfaced by the SeatGeek and Spotify clients.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The events provider answered successfully but the requested window
    /// contains no concerts. User-facing, not a system fault.
    #[error("no concerts found in the requested window")]
    NoResultsFound,

    /// A non-success HTTP status or a transport-level failure from any
    /// upstream call. May be transient; no retries are attempted here.
    #[error("upstream request failed: {0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::RequestFailed(err.to_string())
    }
}
