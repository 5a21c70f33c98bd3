//! A small, type-erased flag registry.
//!
//! [`FlagSet`] holds the declared flags of a program and remembers which of
//! them were assigned on the command line. Flags are visited in
//! lexicographic order of their identifiers so binding is deterministic.

mod cli;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{BoxError, FlagEnvError, Result};
use crate::registry::FlagRegistry;
use crate::value::FlagValue;

/// One declared flag.
pub struct Flag {
    name: String,
    usage: String,
    default: String,
    value: Box<dyn FlagValue>,
}

impl Flag {
    /// Identifier of the flag.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text supplied at declaration.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Value at declaration, rendered as a string.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Current value, rendered as a string.
    #[must_use]
    pub fn value_string(&self) -> String {
        self.value.render()
    }

    /// Current value, if it has type `T`.
    #[must_use]
    pub fn value<T: 'static>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref()
    }

    fn is_switch(&self) -> bool {
        self.value.is_switch()
    }
}

impl std::fmt::Debug for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("default", &self.default)
            .field("value", &self.value.render())
            .finish()
    }
}

/// Declared flags plus the subset assigned on the command line.
///
/// # Examples
///
/// ```
/// use flagenv::FlagSet;
///
/// let mut flags = FlagSet::new("serve");
/// flags
///     .string("listen", "127.0.0.1:8080", "address to bind")?
///     .bool("verbose", false, "log more")?;
/// flags.set("verbose", "true")?;
/// assert!(flags.is_explicit("verbose"));
/// assert_eq!(flags.get::<bool>("verbose"), Some(&true));
/// # Ok::<(), flagenv::FlagEnvError>(())
/// ```
#[derive(Debug, Default)]
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Flag>,
    explicit: BTreeSet<String>,
}

impl FlagSet {
    /// Create an empty set for the program called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: BTreeMap::new(),
            explicit: BTreeSet::new(),
        }
    }

    /// Program name used for help output.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a flag holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::DuplicateFlag`] when `name` is already declared.
    pub fn define<V: FlagValue>(
        &mut self,
        name: impl Into<String>,
        value: V,
        usage: impl Into<String>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if self.flags.contains_key(&name) {
            return Err(FlagEnvError::DuplicateFlag { flag: name });
        }
        let flag = Flag {
            name: name.clone(),
            usage: usage.into(),
            default: value.render(),
            value: Box::new(value),
        };
        self.flags.insert(name, flag);
        Ok(self)
    }

    /// Declare a string flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::DuplicateFlag`] when `name` is already declared.
    pub fn string(
        &mut self,
        name: impl Into<String>,
        default: &str,
        usage: impl Into<String>,
    ) -> Result<&mut Self> {
        self.define(name, default.to_owned(), usage)
    }

    /// Declare a signed integer flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::DuplicateFlag`] when `name` is already declared.
    pub fn int(
        &mut self,
        name: impl Into<String>,
        default: i64,
        usage: impl Into<String>,
    ) -> Result<&mut Self> {
        self.define(name, default, usage)
    }

    /// Declare an unsigned integer flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::DuplicateFlag`] when `name` is already declared.
    pub fn uint(
        &mut self,
        name: impl Into<String>,
        default: u64,
        usage: impl Into<String>,
    ) -> Result<&mut Self> {
        self.define(name, default, usage)
    }

    /// Declare a floating-point flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::DuplicateFlag`] when `name` is already declared.
    pub fn float(
        &mut self,
        name: impl Into<String>,
        default: f64,
        usage: impl Into<String>,
    ) -> Result<&mut Self> {
        self.define(name, default, usage)
    }

    /// Declare a boolean switch.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::DuplicateFlag`] when `name` is already declared.
    pub fn bool(
        &mut self,
        name: impl Into<String>,
        default: bool,
        usage: impl Into<String>,
    ) -> Result<&mut Self> {
        self.define(name, default, usage)
    }

    /// Look up a declared flag.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// Current value of `name`, if declared with type `T`.
    #[must_use]
    pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
        self.lookup(name).and_then(Flag::value)
    }

    /// Current value of `name`, rendered as a string.
    #[must_use]
    pub fn value_string(&self, name: &str) -> Option<String> {
        self.lookup(name).map(Flag::value_string)
    }

    /// Assign `raw` to `name` as if it came from the command line.
    ///
    /// The flag joins the explicit set only when its setter accepts `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::UnknownFlag`] for undeclared names and
    /// [`FlagEnvError::InvalidValue`] when the setter rejects `raw`.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<()> {
        let flag = self.flag_mut(name)?;
        flag.value
            .set(raw)
            .map_err(|source| FlagEnvError::InvalidValue {
                flag: name.to_owned(),
                value: raw.to_owned(),
                source,
            })?;
        self.explicit.insert(name.to_owned());
        Ok(())
    }

    /// Record that `name` was assigned on the command line without changing
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`FlagEnvError::UnknownFlag`] for undeclared names.
    pub fn mark_explicit(&mut self, name: &str) -> Result<()> {
        self.flag_mut(name)?;
        self.explicit.insert(name.to_owned());
        Ok(())
    }

    /// Whether `name` was assigned on the command line.
    #[must_use]
    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }

    /// Every declared flag, in lexicographic order.
    pub fn visit_all(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Flags assigned on the command line, in lexicographic order.
    pub fn visit(&self) -> impl Iterator<Item = &Flag> {
        self.explicit
            .iter()
            .filter_map(|name| self.flags.get(name))
    }

    /// Number of declared flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    fn flag_mut(&mut self, name: &str) -> Result<&mut Flag> {
        self.flags
            .get_mut(name)
            .ok_or_else(|| FlagEnvError::UnknownFlag {
                flag: name.to_owned(),
            })
    }
}

impl FlagRegistry for FlagSet {
    fn flag_names(&self) -> Vec<String> {
        self.flags.keys().cloned().collect()
    }

    fn is_explicit(&self, flag: &str) -> bool {
        Self::is_explicit(self, flag)
    }

    fn assign(&mut self, flag: &str, raw: &str) -> std::result::Result<(), BoxError> {
        self.flag_mut(flag)?.value.set(raw)
    }
}
