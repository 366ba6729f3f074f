//! Insertion-ordered value set.

use std::collections::HashSet;

/// A set of values that remembers insertion order.
///
/// The cascade working set needs set membership for the fixpoint and a stable
/// order for what is eventually emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl CheckedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Returns true if it was not already present.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.members.contains(value) {
            return false;
        }
        self.members.insert(value.to_string());
        self.order.push(value.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    /// Remove every value for which `remove` returns true.
    pub fn remove_where(&mut self, mut remove: impl FnMut(&str) -> bool) -> usize {
        let before = self.order.len();
        let members = &mut self.members;
        self.order.retain(|v| {
            if remove(v) {
                members.remove(v);
                false
            } else {
                true
            }
        });
        before - self.order.len()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Value at an insertion position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

impl<S: AsRef<str>> FromIterator<S> for CheckedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for CheckedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut set: CheckedSet = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_remove_where_updates_membership() {
        let mut set: CheckedSet = ["a", "b", "c"].into_iter().collect();
        let removed = set.remove_where(|v| v != "b");
        assert_eq!(removed, 2);
        assert!(!set.contains("a"));
        assert!(set.contains("b"));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["b"]);
    }
}
