//! Error taxonomy for a single lookup.
//!
//! Every lookup ends in exactly one of: a resolved version, or one of
//! these three classifications. Display strings double as the public
//! JSON error messages served by the REST layer.

use thiserror::Error;

/// Terminal failure classifications for a lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The upstream catalog explicitly reports the package as unknown
    /// (HTTP 404 on the details page).
    #[error("Package not found")]
    NotFound,

    /// The document was fetched but no extraction strategy produced a
    /// version. Usually means the page layout changed; retry later
    /// after the extraction heuristics are refreshed.
    #[error("Could not parse Play Store page")]
    ParseFailed,

    /// The document could not be obtained at all: transport failure
    /// (DNS, timeout, connection reset) or an upstream 5xx.
    #[error("Error retrieving app information")]
    Fetch(#[source] Option<reqwest::Error>),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Fetch(Some(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(LookupError::NotFound.to_string(), "Package not found");
        assert_eq!(
            LookupError::ParseFailed.to_string(),
            "Could not parse Play Store page"
        );
        assert_eq!(
            LookupError::Fetch(None).to_string(),
            "Error retrieving app information"
        );
    }
}
