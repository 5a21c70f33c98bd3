//! Type-erased flag values.
//!
//! A [`FlagValue`] owns the current value of one flag and knows how to parse
//! a raw string into it. Parsing happens before assignment, so a rejected
//! string never disturbs the value already held.

use std::any::Any;

use crate::error::BoxError;

/// A settable, type-erased flag value.
///
/// Implemented for the primitive types and `String`. Hosts with richer flag
/// types implement it directly.
///
/// # Examples
///
/// ```
/// use flagenv::FlagValue;
///
/// let mut port: u16 = 80;
/// port.set("8080").map_err(|e| e.to_string())?;
/// assert_eq!(port, 8080);
/// assert!(port.set("eighty").is_err());
/// assert_eq!(port, 8080);
/// # Ok::<(), String>(())
/// ```
pub trait FlagValue: Any + Send + Sync {
    /// Parse `raw` and store the result.
    ///
    /// # Errors
    ///
    /// Returns the parser's error when `raw` is not a valid value. The stored
    /// value is left unchanged.
    fn set(&mut self, raw: &str) -> Result<(), BoxError>;

    /// Render the current value as a string.
    fn render(&self) -> String;

    /// Borrow the value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Whether the flag behaves as a switch that may appear without a value.
    fn is_switch(&self) -> bool {
        false
    }
}

macro_rules! from_str_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FlagValue for $ty {
                fn set(&mut self, raw: &str) -> Result<(), BoxError> {
                    *self = raw.parse::<$ty>()?;
                    Ok(())
                }

                fn render(&self) -> String {
                    self.to_string()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

from_str_value!(
    String, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl FlagValue for bool {
    fn set(&mut self, raw: &str) -> Result<(), BoxError> {
        *self = parse_bool(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_switch(&self) -> bool {
        true
    }
}

/// Parse the boolean spellings accepted by conventional flag parsers.
fn parse_bool(raw: &str) -> Result<bool, BoxError> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(format!("invalid boolean {other:?}").into()),
    }
}
