use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum HarnessError {
    /// A positional argument could not be used.
    InvalidArgument { name: &'static str, value: String },
    /// An environment variable was set to something unusable.
    InvalidEnv { name: &'static str, value: String },
    /// The length range is empty or has a zero step.
    InvalidRange { min: usize, max: usize, step: usize },
    /// A sort produced output that is not in order, the timing is meaningless.
    NotSorted { sort_name: String, lst_len: usize },
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid value for argument {name}: '{value}'")
            }
            Self::InvalidEnv { name, value } => {
                write!(f, "invalid value for env var {name}: '{value}'")
            }
            Self::InvalidRange { min, max, step } => {
                write!(f, "invalid length range {min}..={max} step {step}")
            }
            Self::NotSorted { sort_name, lst_len } => {
                write!(f, "{sort_name} returned unsorted output for length {lst_len}")
            }
            Self::Io(err) => write!(f, "failed to write report: {err}"),
            Self::Json(err) => write!(f, "failed to serialize report: {err}"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
