//! Outcome of a successful bind pass.

/// A flag populated from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundFlag {
    /// Identifier of the populated flag.
    pub flag: String,
    /// Variable whose value was assigned.
    pub variable: String,
}

/// Flags populated during one bind pass, in the order they were bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    bound: Vec<BoundFlag>,
}

impl BindReport {
    pub(crate) fn push(&mut self, flag: String, variable: String) {
        self.bound.push(BoundFlag { flag, variable });
    }

    /// Iterate over the populated flags.
    pub fn iter(&self) -> impl Iterator<Item = &BoundFlag> {
        self.bound.iter()
    }

    /// Number of populated flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Whether no flag was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Whether `flag` was populated.
    #[must_use]
    pub fn contains(&self, flag: &str) -> bool {
        self.variable_for(flag).is_some()
    }

    /// Variable that populated `flag`, if it was populated.
    #[must_use]
    pub fn variable_for(&self, flag: &str) -> Option<&str> {
        self.bound
            .iter()
            .find(|bound| bound.flag == flag)
            .map(|bound| bound.variable.as_str())
    }
}

impl<'a> IntoIterator for &'a BindReport {
    type Item = &'a BoundFlag;
    type IntoIter = std::slice::Iter<'a, BoundFlag>;

    fn into_iter(self) -> Self::IntoIter {
        self.bound.iter()
    }
}
