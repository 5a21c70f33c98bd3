//! Error types produced while binding flags from the environment.

mod conversions;
mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{BoxError, FlagEnvError, Result};

#[cfg(test)]
mod tests;
