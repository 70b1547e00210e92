//! Error Types
//!
//! Backend call failures and form validation failures.

use thiserror::Error;

/// Failure of a backend call.
///
/// Both kinds produce the same user-facing feedback; the distinction only
/// shows up in the console log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network, DNS, request building, or an undecodable body
    #[error("transport failure: {0}")]
    Transport(String),
    /// Well-formed response carrying `success: false`
    #[error("application failure: {}", .0.as_deref().unwrap_or("success=false"))]
    Application(Option<String>),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// A form field that could not be turned into a payload value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} has an invalid value: {value:?}")]
    Invalid { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::Application(None).to_string(), "application failure: success=false");
        assert_eq!(
            ApiError::Application(Some("Item not found".into())).to_string(),
            "application failure: Item not found"
        );
        assert_eq!(FormError::Missing("Name").to_string(), "Name is required");
        assert_eq!(
            FormError::Invalid { field: "Quantity", value: "lots".into() }.to_string(),
            "Quantity has an invalid value: \"lots\""
        );
    }
}
