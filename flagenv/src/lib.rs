//! Populate unset command-line flags from environment variables.
//!
//! After the command line has been parsed, every flag that was not assigned
//! explicitly is looked up in the environment. The variable name is derived
//! from the flag name by replacing `.` and `-` with `_`, optionally prefixed
//! and uppercased, unless override names were registered for the flag.
//! Command-line values always win, and empty variables count as unset.
//!
//! ```no_run
//! use flagenv::FlagSet;
//!
//! # fn main() -> Result<(), flagenv::FlagEnvError> {
//! let mut flags = FlagSet::new("serve");
//! flags
//!     .string("listen", "127.0.0.1:8080", "address to bind")?
//!     .int("workers", 4, "worker threads")?;
//! flags.parse_from(std::env::args_os())?;
//!
//! flagenv::set_uppercase(true);
//! flagenv::register_names("listen", ["SERVE_ADDR", ""]);
//! flagenv::parse(&mut flags);
//! # Ok(())
//! # }
//! ```

mod binder;
mod error;
mod flag_set;
mod global;
mod names;
mod options;
mod registry;
mod source;
mod value;

pub use binder::{BindReport, BoundFlag, EnvBinder};
pub use error::{BoxError, FlagEnvError, Result, is_display_request};
pub use flag_set::{Flag, FlagSet};
pub use global::{global, parse, parse_env, register_names, set_prefix, set_uppercase};
pub use names::{NamePolicy, normalize};
pub use options::BindOptions;
pub use registry::FlagRegistry;
pub use source::{EnvSource, ProcessEnv};
pub use value::FlagValue;
