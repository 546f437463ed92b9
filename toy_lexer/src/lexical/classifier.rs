//! Priority-ordered classifier set
//!
//! One classifier per token kind: every symbol and keyword spelling, then the
//! integer, float and identifier shapes. The first classifier that accepts a
//! lexeme wins. Fixed spellings come before the shapes, so `if` is never an
//! identifier, and the identifier shape is tried last.

use super::automaton::{
    Automaton, FloatAutomaton, IdentifierAutomaton, IntegerAutomaton, LiteralAutomaton,
};
use super::error::LexerError;
use crate::grammar::{Keyword, Symbol};
use crate::symbols::IdentifierInterner;
use crate::tokens::Token;
use std::num::IntErrorKind;

/// Outcome of classifying one lexeme
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Accepted(Token),
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    Symbol(Symbol),
    Keyword(Keyword),
    Integer,
    Float,
    Identifier,
}

impl Classifier {
    /// Pure acceptance check; never touches an interner
    pub fn accepts(&self, lexeme: &str) -> bool {
        match self {
            Classifier::Symbol(sym) => LiteralAutomaton::new(sym.as_str()).accepts(lexeme),
            Classifier::Keyword(kw) => LiteralAutomaton::new(kw.as_str()).accepts(lexeme),
            Classifier::Integer => IntegerAutomaton.accepts(lexeme),
            Classifier::Float => FloatAutomaton.accepts(lexeme),
            Classifier::Identifier => IdentifierAutomaton.accepts(lexeme),
        }
    }

    /// Build the token for a lexeme this classifier accepted
    ///
    /// Identifiers are interned here; numeric literals are clamped when out
    /// of range, which is reported through the returned diagnostic.
    fn produce(
        &self,
        lexeme: &str,
        interner: &mut IdentifierInterner,
    ) -> (Token, Option<LexerError>) {
        match self {
            Classifier::Symbol(sym) => (Token::Symbol(*sym), None),
            Classifier::Keyword(kw) => (Token::Keyword(*kw), None),
            Classifier::Identifier => (Token::Identifier(interner.resolve(lexeme)), None),
            Classifier::Integer => {
                let (value, overflow) = parse_integer(lexeme);
                (Token::IntNum(value), overflow)
            }
            Classifier::Float => {
                let (value, overflow) = parse_float(lexeme);
                (Token::FloatNum(value), overflow)
            }
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Classifier::Symbol(sym) => sym.kind_name(),
            Classifier::Keyword(kw) => kw.kind_name(),
            Classifier::Integer => "INTNUM",
            Classifier::Float => "FLOATNUM",
            Classifier::Identifier => "ID",
        }
    }
}

/// Every classifier in dispatch priority order
pub fn classifiers() -> impl Iterator<Item = Classifier> {
    Symbol::ALL
        .into_iter()
        .map(Classifier::Symbol)
        .chain(Keyword::ALL.into_iter().map(Classifier::Keyword))
        .chain([Classifier::Integer, Classifier::Float, Classifier::Identifier])
}

/// Classify a lexeme, interning it if it is an identifier
pub fn classify(lexeme: &str, interner: &mut IdentifierInterner) -> Classification {
    classify_with_diagnostics(lexeme, interner).0
}

/// Classify a lexeme and also return any numeric clamping that happened
pub fn classify_with_diagnostics(
    lexeme: &str,
    interner: &mut IdentifierInterner,
) -> (Classification, Option<LexerError>) {
    let Some(classifier) = classifiers().find(|c| c.accepts(lexeme)) else {
        return (Classification::Unrecognized, None);
    };

    let (token, overflow) = classifier.produce(lexeme, interner);

    if let Some(error) = &overflow {
        log_warning!(error.error_code(), error.to_string(),
            "lexeme" => lexeme,
            "classifier" => classifier.kind_name()
        );
    }

    (Classification::Accepted(token), overflow)
}

/// Every classifier that accepts `lexeme`, in priority order
pub fn accepting_classifiers(lexeme: &str) -> Vec<Classifier> {
    classifiers().filter(|c| c.accepts(lexeme)).collect()
}

// ============================================================================
// NUMERIC PARSING
// ============================================================================

/// Parse a decimal literal, clamping to `u64::MAX` on overflow
fn parse_integer(lexeme: &str) -> (u64, Option<LexerError>) {
    match lexeme.parse::<u64>() {
        Ok(value) => (value, None),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => (
            u64::MAX,
            Some(LexerError::NumericOverflow {
                lexeme: lexeme.to_string(),
                clamped_to: u64::MAX.to_string(),
            }),
        ),
        Err(_) => (0, None),
    }
}

/// Parse a float literal, clamping infinite results to `f64::MAX`
fn parse_float(lexeme: &str) -> (f64, Option<LexerError>) {
    match lexeme.parse::<f64>() {
        Ok(value) if value.is_infinite() => (
            f64::MAX,
            Some(LexerError::NumericOverflow {
                lexeme: lexeme.to_string(),
                clamped_to: f64::MAX.to_string(),
            }),
        ),
        Ok(value) => (value, None),
        Err(_) => (0.0, None),
    }
}
