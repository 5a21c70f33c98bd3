//! Trait-based conversions between external error types and `FlagEnvError`.

use figment::Error as FigmentError;

use super::FlagEnvError;

impl From<clap::Error> for FlagEnvError {
    fn from(e: clap::Error) -> Self {
        Self::CliParsing(e.into())
    }
}

impl From<FigmentError> for FlagEnvError {
    fn from(e: FigmentError) -> Self {
        Self::Options(e.into())
    }
}

impl From<FlagEnvError> for FigmentError {
    /// Allow using `?` in tests and examples that return `figment::Error`.
    fn from(e: FlagEnvError) -> Self {
        match e {
            FlagEnvError::Options(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
