use std::fmt;

/// Error returned when a string does not name one of the known regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegionError {
    input: String,
}

impl ParseRegionError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown region {:?} (expected one of: Global, North America, South America, Europe, Africa, Asia, Oceania)",
            self.input
        )
    }
}

impl std::error::Error for ParseRegionError {}
