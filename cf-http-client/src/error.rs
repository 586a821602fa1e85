//! Error types for the Codeforces HTTP client

use thiserror::Error;

/// Errors that can occur when using the Codeforces HTTP client
#[derive(Error, Debug)]
pub enum CfError {
    /// HTTP request failed (includes connect errors and timeouts)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status with a body that is not an API envelope
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Response body is not the expected JSON document
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a status other than `OK`
    #[error("API error: {comment}")]
    Api {
        /// The `comment` field sent by the API
        comment: String,
    },

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
