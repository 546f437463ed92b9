//! Token model for the toy language
//!
//! The token set is closed: every consumer matches exhaustively, so adding a
//! variant is a compile error everywhere it is not handled.
use crate::grammar::{Keyword, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id handed out by the identifier interner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentifierId(pub u64);

impl IdentifierId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IdentifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How symbol and keyword tokens are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderStyle {
    /// `<KW_IF>`
    #[default]
    Canonical,
    /// `<KW_IF: "if">`
    Echo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Symbol(Symbol),
    Keyword(Keyword),
    Identifier(IdentifierId),
    /// Unsigned integer literal, clamped to `u64::MAX` on overflow
    IntNum(u64),
    /// Float literal, clamped to `f64::MAX` when out of range
    FloatNum(f64),
    /// Lexeme that could not be classified or recovered
    Unknown { lexeme: String, line: usize },
}

/// Coarse grouping used for metrics and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Symbol,
    Keyword,
    Identifier,
    Numeric,
    Error,
}

impl Token {
    pub fn category(&self) -> TokenCategory {
        match self {
            Self::Symbol(_) => TokenCategory::Symbol,
            Self::Keyword(_) => TokenCategory::Keyword,
            Self::Identifier(_) => TokenCategory::Identifier,
            Self::IntNum(_) | Self::FloatNum(_) => TokenCategory::Numeric,
            Self::Unknown { .. } => TokenCategory::Error,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Symbol(sym) => sym.kind_name(),
            Self::Keyword(kw) => kw.kind_name(),
            Self::Identifier(_) => "ID",
            Self::IntNum(_) => "INTNUM",
            Self::FloatNum(_) => "FLOATNUM",
            Self::Unknown { .. } => "ERROR_TOKEN",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    pub fn as_identifier(&self) -> Option<IdentifierId> {
        match self {
            Self::Identifier(id) => Some(*id),
            _ => None,
        }
    }

    pub fn render(&self, style: RenderStyle) -> String {
        match (self, style) {
            (Self::Symbol(sym), RenderStyle::Echo) => {
                format!("<{}: \"{}\">", sym.kind_name(), sym.as_str())
            }
            (Self::Keyword(kw), RenderStyle::Echo) => {
                format!("<{}: \"{}\">", kw.kind_name(), kw.as_str())
            }
            (Self::Symbol(_) | Self::Keyword(_), RenderStyle::Canonical) => {
                format!("<{}>", self.kind_name())
            }
            (Self::Identifier(id), _) => format!("<ID: {}>", id),
            (Self::IntNum(value), _) => format!("<INTNUM: {}>", value),
            (Self::FloatNum(value), _) => format!("<FLOATNUM: {}>", value),
            (Self::Unknown { lexeme, line }, _) => {
                format!("<ERROR_TOKEN \"{}\" at line {}>", lexeme, line)
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::Canonical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rendering() {
        assert_eq!(Token::Keyword(Keyword::Proc).to_string(), "<KW_PROC>");
        assert_eq!(Token::Symbol(Symbol::Assign).to_string(), "<ASSIGN>");
        assert_eq!(Token::Identifier(IdentifierId(1)).to_string(), "<ID: 1>");
        assert_eq!(Token::IntNum(10).to_string(), "<INTNUM: 10>");
        assert_eq!(Token::FloatNum(3.14).to_string(), "<FLOATNUM: 3.14>");
        assert_eq!(
            Token::Unknown {
                lexeme: "@@@@@".to_string(),
                line: 4
            }
            .to_string(),
            "<ERROR_TOKEN \"@@@@@\" at line 4>"
        );
    }

    #[test]
    fn test_echo_rendering_only_affects_fixed_tokens() {
        let style = RenderStyle::Echo;
        assert_eq!(Token::Keyword(Keyword::If).render(style), "<KW_IF: \"if\">");
        assert_eq!(Token::Symbol(Symbol::Geq).render(style), "<GEQ: \">=\">");
        assert_eq!(Token::IntNum(7).render(style), "<INTNUM: 7>");
        assert_eq!(Token::Identifier(IdentifierId(2)).render(style), "<ID: 2>");
    }

    #[test]
    fn test_categories() {
        assert_eq!(Token::FloatNum(1.5).category(), TokenCategory::Numeric);
        assert_eq!(Token::IntNum(1).category(), TokenCategory::Numeric);
        assert_eq!(Token::Keyword(Keyword::True).category(), TokenCategory::Keyword);
        assert!(Token::Unknown {
            lexeme: "?".to_string(),
            line: 1
        }
        .is_error());
        assert_eq!(
            Token::Identifier(IdentifierId(9)).as_identifier(),
            Some(IdentifierId(9))
        );
    }

    #[test]
    fn test_clamped_values_render() {
        assert_eq!(
            Token::IntNum(u64::MAX).to_string(),
            "<INTNUM: 18446744073709551615>"
        );
        assert!(Token::FloatNum(f64::MAX).to_string().starts_with("<FLOATNUM: 1797"));
    }
}
