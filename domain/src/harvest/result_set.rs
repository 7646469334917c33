//! Result set entity

use std::collections::HashSet;

/// Deduplicated union of every string discovered during a run (Entity)
///
/// Only grows: the sole mutation is [`ResultSet::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    items: HashSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `items` into the set, returning how many were new
    pub fn merge<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let before = self.items.len();
        self.items.extend(items.into_iter().map(Into::into));
        self.items.len() - before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Items in lexicographic order, for stable output
    pub fn sorted(&self) -> Vec<&str> {
        let mut items: Vec<&str> = self.iter().collect();
        items.sort_unstable();
        items
    }
}

impl IntoIterator for ResultSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
