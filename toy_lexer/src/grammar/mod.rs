//! Fixed lexical vocabulary of the toy language

pub mod keywords;
pub mod symbols;

pub use keywords::{is_reserved_keyword, Keyword};
pub use symbols::Symbol;
