//! Shared primitive types used across the lexer

pub mod location;

pub use location::{Located, Location};
