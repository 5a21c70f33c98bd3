//! Helpers for classifying external errors.

use clap::error::ErrorKind;

use super::FlagEnvError;

/// Returns `true` when the error is clap reporting `--help` or `--version`.
///
/// Hosts that parse with [`crate::FlagSet::parse_from`] should hand these
/// back to clap via [`clap::Error::exit`] so the process ends with a zero
/// status and the rendered help text.
#[must_use]
pub fn is_display_request(err: &FlagEnvError) -> bool {
    matches!(
        err,
        FlagEnvError::CliParsing(clap_err)
            if matches!(clap_err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
    )
}
