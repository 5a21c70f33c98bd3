//! Process-wide binder and convenience entry points.
//!
//! Most programs bind once at startup. These functions share a single
//! [`EnvBinder`] so override names and policy can be registered from
//! wherever the flags are declared.

use std::process;
use std::sync::LazyLock;

use tracing::error;

use crate::binder::{BindReport, EnvBinder};
use crate::error::{FlagEnvError, Result};
use crate::registry::FlagRegistry;

static GLOBAL: LazyLock<EnvBinder> = LazyLock::new(EnvBinder::new);

/// The shared binder used by the functions in this module.
#[must_use]
pub fn global() -> &'static EnvBinder {
    &GLOBAL
}

/// Replace the candidate variable names for `flag` on the shared binder.
///
/// See [`EnvBinder::register_names`].
pub fn register_names<I, S>(flag: &str, candidates: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL.register_names(flag, candidates);
}

/// Set the prefix of generated names on the shared binder.
pub fn set_prefix(prefix: impl Into<String>) {
    GLOBAL.set_prefix(prefix);
}

/// Toggle uppercasing of generated names on the shared binder.
///
/// With uppercasing on, a flag named `foobar` is read from `FOOBAR`.
pub fn set_uppercase(uppercase: bool) {
    GLOBAL.set_uppercase(uppercase);
}

/// Populate unset flags from the process environment, returning any error.
///
/// # Errors
///
/// Returns [`FlagEnvError::SetterRejected`] for the first flag whose setter
/// rejects its environment value.
pub fn parse_env<F>(flags: &mut F) -> Result<BindReport>
where
    F: FlagRegistry + ?Sized,
{
    GLOBAL.bind(flags)
}

/// Populate unset flags from the process environment, exiting the process
/// with status 1 when a value is rejected.
///
/// Use [`parse_env`] to handle the error instead.
pub fn parse<F>(flags: &mut F) -> BindReport
where
    F: FlagRegistry + ?Sized,
{
    match parse_env(flags) {
        Ok(report) => report,
        Err(err) => exit_with(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "fatal configuration errors are reported on stderr like argument errors"
)]
fn exit_with(err: &FlagEnvError) -> ! {
    error!(flag = err.flag(), value = err.value(), "{err}");
    eprintln!("flagenv: {err}");
    process::exit(1);
}
