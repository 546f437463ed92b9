//! Fixed constants of the toy language and its command-line surface.
//!
//! Unlike `compile_time`, these do not change between build profiles: they are
//! part of the observable output format.

/// Name of the output file created in the current working directory
pub const OUTPUT_FILE_NAME: &str = "out.txt";

/// Number of positional arguments the CLI accepts (the input path)
pub const EXPECTED_ARGUMENT_COUNT: usize = 1;

/// First id handed out by a fresh identifier interner
pub const FIRST_IDENTIFIER_ID: u64 = 1;

/// Separator placed between rendered tokens on an output line
pub const TOKEN_SEPARATOR: &str = " ";
