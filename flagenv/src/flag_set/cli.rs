//! Bridge between [`FlagSet`] and `clap`.
//!
//! clap does the argument parsing; the set only learns which flags the
//! command line supplied and what raw text it supplied for them.

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::trace;

use super::{Flag, FlagSet};
use crate::error::{FlagEnvError, Result};

impl Flag {
    fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.name.clone())
            .long(self.name.clone())
            .help(self.usage.clone())
            .action(ArgAction::Set);
        if self.is_switch() {
            arg.num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .value_name("BOOL")
        } else {
            arg.value_name("VALUE").allow_negative_numbers(true)
        }
    }
}

impl FlagSet {
    /// Build a `clap` command with one `--<name>` option per declared flag.
    ///
    /// Boolean switches accept `--name` on its own or `--name=<bool>`.
    /// Repeating a flag keeps the last value. A declared `help` flag replaces
    /// clap's own `--help`. No defaults are registered with clap, so only
    /// flags present on the command line carry a value source.
    #[must_use]
    pub fn command(&self) -> Command {
        let cmd = Command::new(self.name.clone())
            .args_override_self(true)
            .disable_help_flag(self.flags.contains_key("help"));
        self.visit_all()
            .fold(cmd, |command, flag| command.arg(flag.to_arg()))
    }

    /// Assign every flag that `matches` reports as coming from the command
    /// line and mark it explicit.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::InvalidValue`] when a setter rejects the
    /// supplied text or the text is not valid Unicode.
    pub fn record_matches(&mut self, matches: &ArgMatches) -> Result<()> {
        let names: Vec<String> = self.flags.keys().cloned().collect();
        for name in names {
            if matches.value_source(&name) != Some(ValueSource::CommandLine) {
                continue;
            }
            let Some(raw) = matches
                .try_get_raw(&name)
                .ok()
                .flatten()
                .and_then(Iterator::last)
            else {
                continue;
            };
            let text = raw.to_str().ok_or_else(|| FlagEnvError::InvalidValue {
                flag: name.clone(),
                value: raw.to_string_lossy().into_owned(),
                source: "value is not valid Unicode".into(),
            })?;
            trace!(flag = %name, "recording command-line value");
            self.set(&name, text)?;
        }
        Ok(())
    }

    /// Parse `args` with clap and record the explicit flags.
    ///
    /// The first item is the program name, as with [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::CliParsing`] when clap rejects the arguments
    /// (including `--help`, see [`crate::is_display_request`]) and
    /// [`FlagEnvError::InvalidValue`] when a setter rejects a value.
    pub fn parse_from<I, T>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(args)?;
        self.record_matches(&matches)
    }
}
