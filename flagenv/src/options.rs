//! Serializable binder configuration.
//!
//! Hosts that already layer their settings with `figment` can carry the
//! binder's prefix, case policy and override names in the same sources and
//! extract them here.

use std::collections::BTreeMap;

use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::names::NamePolicy;

/// Options used to build an [`crate::EnvBinder`].
///
/// # Examples
///
/// ```
/// use figment::{Figment, providers::Serialized};
/// use flagenv::{BindOptions, EnvBinder};
///
/// let options = BindOptions {
///     prefix: "app_".into(),
///     ..BindOptions::default()
/// };
/// let extracted = BindOptions::extract(&Figment::from(Serialized::defaults(&options)))?;
/// let binder = EnvBinder::from_options(extracted);
/// assert_eq!(binder.names_for("port"), vec!["app_port".to_owned()]);
/// # Ok::<(), flagenv::FlagEnvError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    /// Text prepended to generated names.
    pub prefix: String,
    /// Uppercase generated names.
    pub uppercase: bool,
    /// Candidate variable names per flag; an empty string stands for the
    /// generated name.
    pub names: BTreeMap<String, Vec<String>>,
}

impl BindOptions {
    /// Extract options from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlagEnvError::Options`] when the providers fail or
    /// the data does not match the expected shape.
    pub fn extract(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Naming policy described by these options.
    #[must_use]
    pub fn policy(&self) -> NamePolicy {
        NamePolicy {
            prefix: self.prefix.clone(),
            uppercase: self.uppercase,
        }
    }
}
