use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures while fetching a store promotion page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("failed to read body from {url}: {reason}")]
    Body { url: String, reason: String },
}

/// Rejected product-list mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("nothing to add")]
    EmptyInput,

    #[error("`{0}` is not in the list")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages_are_short() {
        let err = FetchError::Status {
            url: "https://www.willys.se/erbjudanden/ehandel".into(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "HTTP 503 from https://www.willys.se/erbjudanden/ehandel"
        );
    }

    #[test]
    fn list_errors_convert_into_crate_error() {
        let err: Error = ListError::NotFound("ost".into()).into();
        assert!(matches!(err, Error::List(ListError::NotFound(ref p)) if p == "ost"));
        assert_eq!(err.to_string(), "`ost` is not in the list");
    }

    #[test]
    fn io_failures_convert_into_crate_error() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
