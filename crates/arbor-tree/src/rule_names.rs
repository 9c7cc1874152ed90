/// Rule names indexed by rule id.
///
/// The table is fixed once built. Empty tables are allowed; lookups past the
/// end return `None`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RuleNames {
    names: Box<[Box<str>]>,
}

impl RuleNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        Self { names: names.into_iter().map(Into::<Box<str>>::into).collect() }
    }

    /// Returns the name of rule `rule_index`.
    #[inline]
    pub fn get(&self, rule_index: usize) -> Option<&str> {
        self.names.get(rule_index).map(|name| &**name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for RuleNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for RuleNames {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<&[&str]> for RuleNames {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for RuleNames {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}
