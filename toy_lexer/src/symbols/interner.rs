//! Identifier interning table
//!
//! Maps identifier text to a stable numeric id. Ids start at 1 and are
//! handed out in first-seen order; the table only grows.

use crate::config::constants::FIRST_IDENTIFIER_ID;
use crate::tokens::IdentifierId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifierInterner {
    ids: HashMap<String, IdentifierId>,
    /// Texts indexed by `id - FIRST_IDENTIFIER_ID`
    names: Vec<String>,
}

impl IdentifierInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `text`, inserting it with the next id if unseen
    pub fn resolve(&mut self, text: &str) -> IdentifierId {
        if let Some(id) = self.ids.get(text) {
            return *id;
        }

        let id = IdentifierId(FIRST_IDENTIFIER_ID + self.names.len() as u64);
        self.ids.insert(text.to_string(), id);
        self.names.push(text.to_string());
        id
    }

    pub fn lookup(&self, text: &str) -> Option<IdentifierId> {
        self.ids.get(text).copied()
    }

    /// Text interned under `id`
    pub fn name_of(&self, id: IdentifierId) -> Option<&str> {
        let index = id.value().checked_sub(FIRST_IDENTIFIER_ID)?;
        self.names.get(usize::try_from(index).ok()?).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Every `(id, text)` pair in id order
    pub fn entries(&self) -> impl Iterator<Item = (IdentifierId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (IdentifierId(FIRST_IDENTIFIER_ID + i as u64), name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_in_first_seen_order() {
        let mut interner = IdentifierInterner::new();

        assert_eq!(interner.resolve("_foo"), IdentifierId(1));
        assert_eq!(interner.resolve("_x"), IdentifierId(2));
        assert_eq!(interner.resolve("_foo"), IdentifierId(1));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut interner = IdentifierInterner::new();
        let samples = ["_", "__", "_a_b", "_z", "_a_b"];

        let first: Vec<_> = samples.iter().map(|s| interner.resolve(s)).collect();
        let second: Vec<_> = samples.iter().map(|s| interner.resolve(s)).collect();

        assert_eq!(first, second);
        assert_eq!(interner.len(), 4);
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let mut interner = IdentifierInterner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.lookup("_a"), None);
        assert!(interner.is_empty());

        let id = interner.resolve("_a");
        assert_eq!(interner.lookup("_a"), Some(id));
        assert_eq!(interner.name_of(id), Some("_a"));
        assert_eq!(interner.name_of(IdentifierId(0)), None);
        assert_eq!(interner.name_of(IdentifierId(99)), None);
    }

    #[test]
    fn test_entries_in_id_order() {
        let mut interner = IdentifierInterner::new();
        for name in ["_c", "_a", "_b", "_a"] {
            interner.resolve(name);
        }

        let entries: Vec<_> = interner.entries().collect();
        assert_eq!(
            entries,
            vec![
                (IdentifierId(1), "_c"),
                (IdentifierId(2), "_a"),
                (IdentifierId(3), "_b"),
            ]
        );
    }

    #[test]
    fn test_interners_are_independent() {
        let mut a = IdentifierInterner::new();
        let mut b = IdentifierInterner::new();

        a.resolve("_one");
        a.resolve("_two");

        assert_eq!(b.resolve("_two"), IdentifierId(1));
        assert_eq!(a.lookup("_two"), Some(IdentifierId(2)));
    }
}
