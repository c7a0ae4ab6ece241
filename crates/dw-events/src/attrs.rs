//! Ordered attribute sets and whitelist filtering.

/// An ordered mapping from attribute name to string value.
///
/// Insertion order is preserved, which makes attribute serialization and
/// whitelist filtering deterministic. Duplicate names are not representable:
/// setting an existing name replaces its value in place.
///
/// Attribute sets are cheap, short-lived values: created per event,
/// filtered and merged with construct defaults, then serialized once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set contains no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set an attribute. If the name is already present its value is
    /// replaced in place, keeping the original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up an attribute value by name. Names are case-sensitive.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Whether the given name is present with exactly the given value.
    #[must_use]
    pub fn contains_value(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Merge another set into this one. Attributes from `other` win over
    /// existing values; new names are appended in `other`'s order.
    pub fn merge(&mut self, other: &AttributeSet) {
        for (name, value) in &other.entries {
            self.set(name.clone(), value.clone());
        }
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over the `(name, value)` pairs of an [`AttributeSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}

/// Filter an attribute set against a whitelist of allowed names.
///
/// Returns a new set containing, in the original order, only the attributes
/// whose names appear in `allowed`. `None` filters to an empty set.
#[must_use]
pub fn filter_attributes(attrs: Option<&AttributeSet>, allowed: &[&str]) -> AttributeSet {
    let Some(attrs) = attrs else {
        return AttributeSet::new();
    };
    attrs
        .iter()
        .filter(|(name, _)| allowed.contains(name))
        .collect()
}
