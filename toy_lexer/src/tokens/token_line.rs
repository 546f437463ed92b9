//! One input line worth of tokens

use super::token::{RenderStyle, Token, TokenCategory};
use crate::config::constants::TOKEN_SEPARATOR;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenLine {
    /// 1-based line number
    pub line: usize,
    pub tokens: Vec<Token>,
}

impl TokenLine {
    pub fn new(line: usize, tokens: Vec<Token>) -> Self {
        Self { line, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn count_category(&self, category: TokenCategory) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.category() == category)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count_category(TokenCategory::Error)
    }

    /// Rendered tokens joined by a single space, without a line terminator
    pub fn render(&self, style: RenderStyle) -> String {
        render_tokens(&self.tokens, style)
    }
}

pub fn render_tokens(tokens: &[Token], style: RenderStyle) -> String {
    tokens
        .iter()
        .map(|t| t.render(style))
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Keyword, Symbol};
    use crate::tokens::IdentifierId;

    #[test]
    fn test_render_joins_with_single_space() {
        let line = TokenLine::new(
            1,
            vec![
                Token::Keyword(Keyword::Proc),
                Token::Identifier(IdentifierId(1)),
                Token::Symbol(Symbol::Assign),
                Token::IntNum(10),
            ],
        );

        assert_eq!(
            line.render(RenderStyle::Canonical),
            "<KW_PROC> <ID: 1> <ASSIGN> <INTNUM: 10>"
        );
        assert_eq!(line.count_category(TokenCategory::Identifier), 1);
    }

    #[test]
    fn test_empty_line_renders_empty() {
        let line = TokenLine::new(3, Vec::new());
        assert!(line.is_empty());
        assert_eq!(line.render(RenderStyle::Echo), "");
    }
}
