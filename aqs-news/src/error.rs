use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum NewsError {
    /// The request never produced a response.
    Request(String),
    /// The service answered with a non-success status.
    Status(u16),
    /// The reply was not the expected JSON.
    Malformed(String),
    /// The reply parsed but contained no articles.
    Empty,
}

impl fmt::Display for NewsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsError::Request(msg) => write!(f, "News request failed: {}", msg),
            NewsError::Status(code) => write!(f, "News service returned HTTP {}", code),
            NewsError::Malformed(msg) => write!(f, "News reply was not valid JSON: {}", msg),
            NewsError::Empty => write!(f, "News service returned no articles"),
        }
    }
}

impl std::error::Error for NewsError {}
