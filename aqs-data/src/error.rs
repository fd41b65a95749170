use std::fmt;

/// Generator precondition violations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidArgument(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for GeneratorError {}
