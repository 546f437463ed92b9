//! Token model for the toy language lexer
//!
//! ## Key Components
//!
//! - **[`Token`]** - closed set of lexical categories and their payloads
//! - **[`RenderStyle`]** - canonical `<KW_IF>` or echo `<KW_IF: "if">` output
//! - **[`TokenLine`]** - the tokens of one input line, rendered space-joined
//! - **[`vocabulary`]** - every fixed symbol and keyword spelling, in
//!   suggestion tie-break order
//!
//! ## Rendering
//!
//! | Token      | Output                           |
//! |------------|----------------------------------|
//! | symbol     | `<GEQ>`                          |
//! | keyword    | `<KW_IF>`                        |
//! | identifier | `<ID: n>`                        |
//! | integer    | `<INTNUM: v>`                    |
//! | float      | `<FLOATNUM: v>`                  |
//! | error      | `<ERROR_TOKEN "lexeme" at line L>` |

pub mod token;
pub mod token_line;
pub mod vocabulary;

pub use token::{IdentifierId, RenderStyle, Token, TokenCategory};
pub use token_line::{render_tokens, TokenLine};
pub use vocabulary::vocabulary;
