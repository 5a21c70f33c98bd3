//! Populate unset flags from environment variables.
//!
//! An [`EnvBinder`] owns the name-override table and the naming policy. A
//! bind pass walks the declared flags once, skips every flag assigned on the
//! command line, and hands the first non-empty candidate variable to the
//! flag's setter. The pass stops at the first setter failure.

mod report;

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::error::{FlagEnvError, Result};
use crate::names::NamePolicy;
use crate::options::BindOptions;
use crate::registry::FlagRegistry;
use crate::source::{EnvSource, ProcessEnv};

pub use report::{BindReport, BoundFlag};

/// Binds environment variables into a [`FlagRegistry`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use flagenv::{EnvBinder, FlagSet};
///
/// let mut flags = FlagSet::new("app");
/// flags.string("log.level", "info", "log verbosity")?;
///
/// let env = HashMap::from([("log_level".to_owned(), "debug".to_owned())]);
/// let report = EnvBinder::new().bind_from(&mut flags, &env)?;
///
/// assert_eq!(flags.get::<String>("log.level").map(String::as_str), Some("debug"));
/// assert_eq!(report.variable_for("log.level"), Some("log_level"));
/// # Ok::<(), flagenv::FlagEnvError>(())
/// ```
#[derive(Debug, Default)]
pub struct EnvBinder {
    overrides: Mutex<HashMap<String, Vec<String>>>,
    policy: RwLock<NamePolicy>,
}

impl EnvBinder {
    /// Binder with no overrides, no prefix and no uppercasing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(NamePolicy::new())
    }

    /// Binder using `policy` for generated names.
    #[must_use]
    pub fn with_policy(policy: NamePolicy) -> Self {
        Self {
            overrides: Mutex::new(HashMap::new()),
            policy: RwLock::new(policy),
        }
    }

    /// Binder configured from extracted [`BindOptions`].
    #[must_use]
    pub fn from_options(options: BindOptions) -> Self {
        let binder = Self::with_policy(options.policy());
        for (flag, candidates) in options.names {
            binder.register_names(&flag, candidates);
        }
        binder
    }

    /// Snapshot of the current naming policy.
    #[must_use]
    pub fn policy(&self) -> NamePolicy {
        self.policy.read().clone()
    }

    /// Set the prefix prepended to generated names.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.policy.write().prefix = prefix.into();
    }

    /// Toggle uppercasing of generated names.
    pub fn set_uppercase(&self, uppercase: bool) {
        self.policy.write().uppercase = uppercase;
    }

    /// Replace the candidate variable names for `flag`.
    ///
    /// Candidates are tried in order and used verbatim; an empty candidate
    /// stands for the generated name. Passing no candidates removes the
    /// override so the generated name applies again.
    pub fn register_names<I, S>(&self, flag: &str, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = candidates.into_iter().map(Into::into).collect();
        let mut table = self.overrides.lock();
        if names.is_empty() {
            table.remove(flag);
        } else {
            table.insert(flag.to_owned(), names);
        }
    }

    /// Registered override names for `flag`, if any.
    #[must_use]
    pub fn overrides_for(&self, flag: &str) -> Option<Vec<String>> {
        self.overrides.lock().get(flag).cloned()
    }

    /// Candidate variable names for `flag` under the current policy.
    #[must_use]
    pub fn names_for(&self, flag: &str) -> Vec<String> {
        self.candidates(flag, &self.policy())
    }

    /// Bind from the process environment using the configured policy.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::SetterRejected`] for the first flag whose
    /// setter rejects its environment value.
    pub fn bind<F>(&self, flags: &mut F) -> Result<BindReport>
    where
        F: FlagRegistry + ?Sized,
    {
        self.run(flags, &ProcessEnv, &self.policy())
    }

    /// Bind from the process environment, prefixing generated names with
    /// `prefix` for this pass instead of the configured prefix.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::SetterRejected`] for the first flag whose
    /// setter rejects its environment value.
    pub fn bind_prefixed<F>(&self, flags: &mut F, prefix: &str) -> Result<BindReport>
    where
        F: FlagRegistry + ?Sized,
    {
        let policy = self.policy().with_prefix(prefix);
        self.run(flags, &ProcessEnv, &policy)
    }

    /// Bind from `env` using the configured policy.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::SetterRejected`] for the first flag whose
    /// setter rejects its environment value.
    pub fn bind_from<F, E>(&self, flags: &mut F, env: &E) -> Result<BindReport>
    where
        F: FlagRegistry + ?Sized,
        E: EnvSource + ?Sized,
    {
        self.run(flags, env, &self.policy())
    }

    fn candidates(&self, flag: &str, policy: &NamePolicy) -> Vec<String> {
        let overrides = self.overrides_for(flag);
        policy.candidates(flag, overrides.as_deref())
    }

    fn run<F, E>(&self, flags: &mut F, env: &E, policy: &NamePolicy) -> Result<BindReport>
    where
        F: FlagRegistry + ?Sized,
        E: EnvSource + ?Sized,
    {
        let mut report = BindReport::default();
        for flag in flags.flag_names() {
            if flags.is_explicit(&flag) {
                trace!(flag = %flag, "skipping flag set on the command line");
                continue;
            }
            let found = self
                .candidates(&flag, policy)
                .into_iter()
                .find_map(|variable| {
                    env.var(&variable)
                        .filter(|value| !value.is_empty())
                        .map(|value| (variable, value))
                });
            let Some((variable, value)) = found else {
                trace!(flag = %flag, "no environment value for flag");
                continue;
            };
            if let Err(source) = flags.assign(&flag, &value) {
                return Err(FlagEnvError::SetterRejected {
                    flag,
                    value,
                    variable,
                    source,
                });
            }
            debug!(flag = %flag, variable = %variable, "populated flag from environment");
            report.push(flag, variable);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests;
