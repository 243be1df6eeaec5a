//! Extracted (identifier, tag) pairs and their ordering.

use std::fmt;

/// One enum member: its Rust identifier and its JSON tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    name: String,
    tag: String,
}

impl Pair {
    /// Create a pair from an identifier and a tag.
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// The declared identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The JSON tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {:?}", self.name, self.tag)
    }
}

/// Pairs in encounter order until [`PairList::sort`] is called.
///
/// Duplicate identifiers are kept as they are found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairList {
    pairs: Vec<Pair>,
}

impl PairList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    pub fn push(&mut self, pair: Pair) {
        self.pairs.push(pair);
    }

    /// Order pairs by identifier using byte-wise comparison.
    pub fn sort(&mut self) {
        self.pairs.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Consume the list and return it ordered by identifier.
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Identifiers in list order.
    pub fn names(&self) -> Vec<&str> {
        self.pairs.iter().map(Pair::name).collect()
    }

    /// Tags in list order.
    pub fn tags(&self) -> Vec<&str> {
        self.pairs.iter().map(Pair::tag).collect()
    }
}

impl FromIterator<Pair> for PairList {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PairList {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for PairList {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
