//! Primary error enum for flag binding flows.

use figment::Error as FigmentError;
use thiserror::Error;

/// Error returned by a flag's setter when it rejects a raw string.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience alias for results carrying a [`FlagEnvError`].
pub type Result<T, E = FlagEnvError> = std::result::Result<T, E>;

/// Errors that can occur while declaring, assigning, or binding flags.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagEnvError {
    /// A flag's setter rejected the value read from the environment.
    ///
    /// The flag keeps whatever value it held before the attempt.
    #[error(
        "invalid value {value:?} for flag {flag} from environment variable {variable}: {source}"
    )]
    SetterRejected {
        /// Identifier of the flag whose setter failed.
        flag: String,
        /// Raw value read from the environment.
        value: String,
        /// Environment variable the value came from.
        variable: String,
        /// Failure reported by the setter.
        #[source]
        source: BoxError,
    },

    /// A flag's setter rejected a value supplied on the command line.
    #[error("invalid value {value:?} for flag {flag}: {source}")]
    InvalidValue {
        /// Identifier of the flag whose setter failed.
        flag: String,
        /// Raw value supplied by the caller.
        value: String,
        /// Failure reported by the setter.
        #[source]
        source: BoxError,
    },

    /// The named flag was never declared.
    #[error("flag provided but not defined: {flag}")]
    UnknownFlag {
        /// Identifier that failed to resolve.
        flag: String,
    },

    /// A flag with the same identifier was already declared.
    #[error("flag redefined: {flag}")]
    DuplicateFlag {
        /// Identifier declared twice.
        flag: String,
    },

    /// Error parsing command-line arguments.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// Error extracting binder options from configuration providers.
    #[error("Failed to extract binder options: {0}")]
    Options(#[from] Box<FigmentError>),
}

impl FlagEnvError {
    /// Identifier of the flag this error concerns, if any.
    #[must_use]
    pub fn flag(&self) -> Option<&str> {
        match self {
            Self::SetterRejected { flag, .. }
            | Self::InvalidValue { flag, .. }
            | Self::UnknownFlag { flag }
            | Self::DuplicateFlag { flag } => Some(flag),
            Self::CliParsing(_) | Self::Options(_) => None,
        }
    }

    /// Raw value that was rejected, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::SetterRejected { value, .. } | Self::InvalidValue { value, .. } => Some(value),
            _ => None,
        }
    }
}
