//! Environment variable name generation.
//!
//! A flag's default variable name replaces `.` and `-` with `_`, gains the
//! configured prefix, and is optionally uppercased as a whole. Registered
//! override names are used verbatim; an empty override stands in for the
//! default name at that position.

/// Replace every `.` and `-` in `flag` with `_`.
///
/// # Examples
///
/// ```
/// assert_eq!(flagenv::normalize("log.level"), "log_level");
/// assert_eq!(flagenv::normalize("dry-run"), "dry_run");
/// ```
#[must_use]
pub fn normalize(flag: &str) -> String {
    flag.chars()
        .map(|c| if matches!(c, '.' | '-') { '_' } else { c })
        .collect()
}

/// Prefix and case policy applied to generated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePolicy {
    /// Text prepended to every generated name.
    pub prefix: String,
    /// Uppercase the generated name, prefix included.
    pub uppercase: bool,
}

impl NamePolicy {
    /// Policy with no prefix and no case change.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix: String::new(),
            uppercase: false,
        }
    }

    /// Replace the prefix.
    #[must_use]
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    /// Toggle uppercasing.
    #[must_use]
    pub fn with_uppercase(self, uppercase: bool) -> Self {
        Self { uppercase, ..self }
    }

    /// Generated variable name for `flag`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagenv::NamePolicy;
    ///
    /// let policy = NamePolicy::new().with_prefix("app_").with_uppercase(true);
    /// assert_eq!(policy.default_name("http.port"), "APP_HTTP_PORT");
    /// ```
    #[must_use]
    pub fn default_name(&self, flag: &str) -> String {
        let name = format!("{}{}", self.prefix, normalize(flag));
        if self.uppercase {
            name.to_uppercase()
        } else {
            name
        }
    }

    /// Ordered candidate names for `flag`.
    ///
    /// Without overrides the generated name is the only candidate. With
    /// overrides each entry is used as written, except that an empty entry
    /// is replaced by the generated name.
    #[must_use]
    pub fn candidates(&self, flag: &str, overrides: Option<&[String]>) -> Vec<String> {
        match overrides {
            None | Some([]) => vec![self.default_name(flag)],
            Some(names) => names
                .iter()
                .map(|name| {
                    if name.is_empty() {
                        self.default_name(flag)
                    } else {
                        name.clone()
                    }
                })
                .collect(),
        }
    }
}
