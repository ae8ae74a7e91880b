/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was empty after trimming whitespace.
    EmptyInput,

    /// The input did not match `<number><unit>`.
    InvalidFormat(String),

    /// The numeric part was not a non-negative number.
    InvalidValue(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "duration string cannot be empty")
            }
            Self::InvalidFormat(s) => {
                write!(
                    f,
                    "invalid duration format: {s:?}, expected a number followed by a unit (ms, s, m, h, d, w, y)",
                )
            }
            Self::InvalidValue(s) => {
                write!(
                    f,
                    "invalid duration value: {s:?}, must be a non-negative number",
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
