// Logging comes first so its macros are visible to every module below
#[macro_use]
pub mod logging;

pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
pub mod pipeline;
pub mod symbols;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{LexicalAnalyzer, Responder, TokenizedSource};
pub use pipeline::{PipelineError, PipelineResult};
pub use symbols::IdentifierInterner;
pub use tokens::{RenderStyle, Token};
