//! "Did you mean?" lookup over the fixed vocabulary
//!
//! Only symbol and keyword spellings are candidates. Identifiers and numbers
//! have no fixed spelling to suggest.

use crate::config::compile_time::lexical::MAX_SUGGESTION_DISTANCE;
use crate::tokens::vocabulary;

/// Closest vocabulary entry to a rejected lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub text: &'static str,
    pub distance: usize,
}

/// Levenshtein distance over chars, unit cost for every edit
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b.chars().enumerate() {
            let substitution = prev_row[j] + usize::from(a_char != b_char);
            let deletion = prev_row[j + 1] + 1;
            let insertion = curr_row[j] + 1;

            curr_row[j + 1] = substitution.min(deletion).min(insertion);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// Number of characters two strings have in common, counting repeats
fn shared_chars(a: &str, b: &str) -> usize {
    let mut pool: Vec<char> = b.chars().collect();
    a.chars()
        .filter(|ch| match pool.iter().position(|p| p == ch) {
            Some(pos) => {
                pool.swap_remove(pos);
                true
            }
            None => false,
        })
        .count()
}

/// Every vocabulary entry within `max_distance`, closest first
///
/// Equal distances prefer the entry sharing more characters with the lexeme,
/// so a swapped pair like `fi` lands on `if` rather than on a one-character
/// symbol. The sort is stable: remaining ties keep vocabulary order.
pub fn ranked_candidates(lexeme: &str, max_distance: usize) -> Vec<Suggestion> {
    let mut candidates: Vec<(Suggestion, usize)> = vocabulary()
        .iter()
        .map(|&text| {
            let suggestion = Suggestion {
                text,
                distance: edit_distance(lexeme, text),
            };
            (suggestion, shared_chars(lexeme, text))
        })
        .filter(|(s, _)| s.distance <= max_distance)
        .collect();

    candidates.sort_by_key(|(s, shared)| (s.distance, std::cmp::Reverse(*shared)));
    candidates.into_iter().map(|(s, _)| s).collect()
}

/// Best suggestion for `lexeme`, if any entry is close enough
pub fn suggest(lexeme: &str) -> Option<Suggestion> {
    ranked_candidates(lexeme, MAX_SUGGESTION_DISTANCE)
        .into_iter()
        .next()
}
