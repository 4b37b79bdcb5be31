use thiserror::Error;

/// Errors produced by route lookup, matching and uri generation.
///
/// Every variant is recoverable by the caller; nothing in this crate is fatal.
/// [`RouterError::NotFound`] is typically converted into an HTTP 404 upstream.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route satisfied the request, or a named route lookup failed.
    #[error("Route not found")]
    NotFound,

    /// A method name did not parse as an http method token.
    #[error("invalid http method: {name}")]
    InvalidMethod { name: String },

    /// Uri generation hit a placeholder with no value supplied for it.
    #[error("missing parameter '{name}' for path '{path}'")]
    MissingParameter { name: String, path: String },
}

impl RouterError {
    pub fn invalid_method<S: ToString>(name: S) -> Self {
        Self::InvalidMethod { name: name.to_string() }
    }

    pub fn missing_parameter<S: ToString>(name: S, path: S) -> Self {
        Self::MissingParameter { name: name.to_string(), path: path.to_string() }
    }
}
