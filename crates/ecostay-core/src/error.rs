//! Errors raised by the recommendation client.
//!
//! None of these reach the person using the client: the orchestrator turns
//! every failure into an empty result set and logs it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("recommendation endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed recommendation response: {0}")]
    Decode(#[from] serde_json::Error),
}
