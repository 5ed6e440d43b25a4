use crate::entity::ErrorPayload;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid swap request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("1inch API error: {0}")]
    Api(ErrorPayload),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
