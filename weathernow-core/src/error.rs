use thiserror::Error;

/// Everything that can go wrong during one city lookup. No variant is fatal
/// to the process; a failure only aborts the lookup it occurred in.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("City name must not be empty")]
    InvalidInput,

    #[error("No location found for '{0}'")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        // Body decoding happens after the transport succeeded; everything
        // else (connect, timeout, status) is a network problem.
        if err.is_decode() {
            LookupError::Parse(err.to_string())
        } else {
            LookupError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_city() {
        let err = LookupError::NotFound("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn json_errors_become_parse() {
        let err = serde_json::from_str::<i32>("not json").unwrap_err();
        assert!(matches!(LookupError::from(err), LookupError::Parse(_)));
    }
}
