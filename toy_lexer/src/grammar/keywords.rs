//! Reserved words of the toy language
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === CONTROL FLOW ===
    If,
    Else,
    For,
    Elif,
    Proc,
    Var,
    Run,
    Return,

    // === TYPE NAMES ===
    Int,
    Float,
    Bool,

    // === BOOLEAN LITERALS ===
    True,
    False,
}

impl Keyword {
    /// Every keyword in classifier priority order
    pub const ALL: [Keyword; 13] = [
        Self::If,
        Self::Else,
        Self::For,
        Self::Elif,
        Self::Proc,
        Self::Var,
        Self::Run,
        Self::Return,
        Self::Int,
        Self::Float,
        Self::True,
        Self::False,
        Self::Bool,
    ];

    /// Exact source spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::Elif => "elif",
            Self::Proc => "proc",
            Self::Var => "var",
            Self::Run => "run",
            Self::Return => "return",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::True => "True",
            Self::False => "False",
        }
    }

    /// Name used inside rendered tokens
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::If => "KW_IF",
            Self::Else => "KW_ELSE",
            Self::For => "KW_FOR",
            Self::Elif => "KW_ELIF",
            Self::Proc => "KW_PROC",
            Self::Var => "KW_VAR",
            Self::Run => "KW_RUN",
            Self::Return => "KW_RETURN",
            Self::Int => "KW_INT",
            Self::Float => "KW_FLOAT",
            Self::Bool => "KW_BOOL",
            Self::True => "KW_TRUE",
            Self::False => "KW_FALSE",
        }
    }

    /// Exact, case-sensitive lookup; `true` and `TRUE` are not keywords
    pub fn from_lexeme(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == s)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_reserved_keyword(s: &str) -> bool {
    Keyword::from_lexeme(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Keyword::from_lexeme("True"), Some(Keyword::True));
        assert_eq!(Keyword::from_lexeme("true"), None);
        assert_eq!(Keyword::from_lexeme("IF"), None);
        assert!(is_reserved_keyword("elif"));
        assert!(!is_reserved_keyword("_if"));
    }

    #[test]
    fn test_spelling_round_trips() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_lexeme(kw.as_str()), Some(kw));
            assert!(kw.kind_name().starts_with("KW_"));
        }
    }}
