//! Operator and punctuation symbols
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    // Arithmetic
    Plus,
    Minus,
    Mul,
    Div,

    // Comparison
    Eq,
    Uneq,
    Geq,
    Leq,
    Gr,
    Le,

    // Binding
    Assign,
    Colon,

    // Grouping
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
}

impl Symbol {
    /// Every symbol in classifier priority order
    pub const ALL: [Symbol; 16] = [
        Self::Plus,
        Self::Minus,
        Self::Mul,
        Self::Div,
        Self::Eq,
        Self::Uneq,
        Self::Assign,
        Self::Colon,
        Self::Geq,
        Self::Leq,
        Self::ParenOpen,
        Self::ParenClose,
        Self::BraceOpen,
        Self::BraceClose,
        Self::Gr,
        Self::Le,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::Uneq => "!=",
            Self::Assign => "<-",
            Self::Colon => ":",
            Self::Geq => ">=",
            Self::Leq => "<=",
            Self::ParenOpen => "(",
            Self::ParenClose => ")",
            Self::BraceOpen => "{",
            Self::BraceClose => "}",
            Self::Gr => ">",
            Self::Le => "<",
        }
    }

    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Eq => "EQ",
            Self::Uneq => "UNEQ",
            Self::Assign => "ASSIGN",
            Self::Colon => "COLON",
            Self::Geq => "GEQ",
            Self::Leq => "LEQ",
            Self::ParenOpen => "PAREN_OPEN",
            Self::ParenClose => "PAREN_CLOSE",
            Self::BraceOpen => "BRACE_OPEN",
            Self::BraceClose => "BRACE_CLOSE",
            Self::Gr => "GR",
            Self::Le => "LE",
        }
    }

    pub fn from_lexeme(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sym| sym.as_str() == s)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_char_symbols() {
        assert_eq!(Symbol::from_lexeme("<-"), Some(Symbol::Assign));
        assert_eq!(Symbol::from_lexeme(">="), Some(Symbol::Geq));
        assert_eq!(Symbol::from_lexeme("="), None);
        assert_eq!(Symbol::from_lexeme("<--"), None);
    }

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<_> = Symbol::ALL.iter().map(|s| s.kind_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Symbol::ALL.len());
    }}
