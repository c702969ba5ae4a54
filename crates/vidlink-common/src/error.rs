use thiserror::Error;

use crate::messages;

/// Every way an extraction request can fail, as seen by the page.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("extraction service returned HTTP {status}")]
    Service { status: u16, detail: Option<String> },

    /// A 2xx body that does not match the result schema.
    #[error("malformed extraction response: {0}")]
    Malformed(String),
}

impl ExtractError {
    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ExtractError::Network(_) => messages::NETWORK_FAILED.to_string(),
            ExtractError::Service {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ExtractError::Service { detail: None, .. } => messages::EXTRACTION_FAILED.to_string(),
            ExtractError::Malformed(_) => messages::MALFORMED_RESPONSE.to_string(),
        }
    }
}
