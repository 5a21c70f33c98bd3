//! Sources of environment variable values.

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::hash::BuildHasher;

use tracing::warn;

/// Lookup of environment variables by exact name.
pub trait EnvSource {
    /// Value of `name`, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(variable = name, "ignoring environment variable that is not valid Unicode");
                None
            }
        }
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
