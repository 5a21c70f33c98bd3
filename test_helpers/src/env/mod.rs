//! Scoped mutation of process environment variables.
//!
//! Every mutation runs under a global re-entrant mutex and returns an RAII
//! guard that puts the previous state back when dropped. An [`EnvScope`]
//! holds the mutex for its whole lifetime so a test can set several
//! variables, bind, and assert without another test touching the
//! environment in between.
//!
//! # Examples
//!
//! ```
//! use flagenv_test_helpers::env;
//!
//! let _scope = env::scope([("FLAGENV_DOC_FOO", Some("bar")), ("FLAGENV_DOC_INT", None)]);
//! assert_eq!(std::env::var("FLAGENV_DOC_FOO").as_deref(), Ok("bar"));
//! assert!(std::env::var("FLAGENV_DOC_INT").is_err());
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring one environment variable on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the mutation.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held for the mutation.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

fn mutate(key: String, value: Option<&OsStr>) -> EnvVarGuard {
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    match value {
        // SAFETY: `ENV_MUTEX` is held for the mutation.
        Some(v) => unsafe { env::set_var(&key, v) },
        // SAFETY: `ENV_MUTEX` is held for the mutation.
        None => unsafe { env::remove_var(&key) },
    }
    EnvVarGuard { key, original }
}

/// Set `key` to `value` until the guard drops.
///
/// # Examples
///
/// ```
/// use flagenv_test_helpers::env;
///
/// let guard = env::set_var("FLAGENV_DOC_SET", "on");
/// assert_eq!(std::env::var("FLAGENV_DOC_SET").as_deref(), Ok("on"));
/// drop(guard);
/// assert!(std::env::var("FLAGENV_DOC_SET").is_err());
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    mutate(key.into(), Some(value.as_ref()))
}

/// Remove `key` until the guard drops.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    mutate(key.into(), None)
}

/// Holds the environment lock and a set of guards.
///
/// Guards are restored, newest first, before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl EnvScope {
    /// Set or remove another variable inside the scope.
    pub fn push(&mut self, key: impl Into<String>, value: Option<&str>) {
        self.guards.push(mutate(key.into(), value.map(OsStr::new)));
    }
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field("guards", &self.guards)
            .finish_non_exhaustive()
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Lock the environment and apply `vars`; `None` removes the variable.
pub fn scope<'a, I>(vars: I) -> EnvScope
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let lock = ENV_MUTEX.lock();
    let guards = vars
        .into_iter()
        .map(|(key, value)| mutate(key.to_owned(), value.map(OsStr::new)))
        .collect();
    EnvScope {
        guards,
        _lock: lock,
    }
}
