use thiserror::Error;

use crate::request::FieldErrors;

/// Errors from the single call to the generative-text endpoint.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The network call failed, or the response body was not readable JSON
    #[error("request to the generative endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("generative endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response JSON is missing the candidate/content/part path
    #[error("response envelope carries no candidate text")]
    Envelope,
}

/// Errors from decoding the model's raw reply into a `Recipe`.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The raw text is not valid JSON at all
    #[error("model output is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Valid JSON, but a required field is absent or of the wrong type
    #[error("model output does not match the recipe shape: {0}")]
    SchemaMismatch(String),
}

/// Top-level error of the one-shot generation API.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Request rejected by field validation
    #[error("invalid request: {0}")]
    Validation(#[from] FieldErrors),

    /// Model invocation failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Model replied, but the reply could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
