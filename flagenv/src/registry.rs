//! The flag registry seam consumed by the binder.

use crate::error::BoxError;

/// The three capabilities [`crate::EnvBinder`] needs from a flag registry.
///
/// [`crate::FlagSet`] implements this trait. Hosts that keep their flags in
/// another structure implement it to bind that structure directly.
pub trait FlagRegistry {
    /// Identifiers of every declared flag, in the order they should be bound.
    fn flag_names(&self) -> Vec<String>;

    /// Whether `flag` was assigned on the command line.
    fn is_explicit(&self, flag: &str) -> bool;

    /// Run the setter of `flag` with `raw`.
    ///
    /// Assigning through this method must not mark the flag explicit.
    ///
    /// # Errors
    ///
    /// Returns the setter's error when it rejects `raw`, or an error when
    /// `flag` is not declared.
    fn assign(&mut self, flag: &str, raw: &str) -> Result<(), BoxError>;
}
