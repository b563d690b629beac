use popify_sdk::APIError;
use thiserror::Error;

/// The widget refuses to start
#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Popify: Missing API key")]
    MissingAccessKey,
}

/// Retrieving the feed failed. Callers treat this as an empty feed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error while fetching the feed")]
    Network,
    #[error("Malformed feed response")]
    MalformedResponse,
    #[error("Unexpected status code `{0}` from the feed")]
    UnexpectedStatus(u16),
}

impl From<APIError> for FetchError {
    fn from(e: APIError) -> Self {
        match e {
            APIError::Network => Self::Network,
            APIError::MalformedResponse => Self::MalformedResponse,
            APIError::UnexpectedStatusCode(status) => Self::UnexpectedStatus(status.as_u16()),
        }
    }
}
