//! Identifier symbols seen during a run

pub mod interner;

pub use interner::IdentifierInterner;
