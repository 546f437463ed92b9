//! The fixed vocabulary the suggestion engine searches
//!
//! Order matters: it is the tie-break order for equally close suggestions.

use crate::grammar::{Keyword, Symbol};
use std::sync::OnceLock;

/// Every symbol spelling then every keyword spelling, built once from the
/// grammar tables
pub fn vocabulary() -> &'static [&'static str] {
    static VOCABULARY: OnceLock<Vec<&'static str>> = OnceLock::new();

    VOCABULARY.get_or_init(|| entries_from_grammar().collect())
}

/// Symbols followed by keywords, each in priority order
fn entries_from_grammar() -> impl Iterator<Item = &'static str> {
    Symbol::ALL
        .into_iter()
        .map(Symbol::as_str)
        .chain(Keyword::ALL.into_iter().map(Keyword::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_precede_keywords() {
        let entries = vocabulary();
        assert_eq!(entries.len(), Symbol::ALL.len() + Keyword::ALL.len());
        assert_eq!(entries.first(), Some(&"+"));
        assert_eq!(entries[Symbol::ALL.len() - 1], "<");
        assert_eq!(entries[Symbol::ALL.len()], "if");
        assert_eq!(entries.last(), Some(&"bool"));
    }

    #[test]
    fn test_no_duplicates() {
        let mut sorted = vocabulary().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), vocabulary().len());
        assert!(vocabulary().contains(&"<-"));
        assert!(!vocabulary().contains(&"_x"));
    }
}
