//! Replacement requests for rejected lexemes
//!
//! The line driver never reads input itself. When a rejected lexeme has a
//! close vocabulary match it hands a [`RecoveryPrompt`] to a [`Responder`] and
//! blocks until it answers.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

/// Everything a responder needs to ask for a replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryPrompt {
    pub lexeme: String,
    /// 1-based
    pub line: usize,
    pub suggestion: &'static str,
    /// 1-based count of prompts issued for the current lexeme
    pub attempt: usize,
}

impl fmt::Display for RecoveryPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Error] <UNKNOWN_TOKEN \"{}\"> at line {}. Did you mean \"{}\"? ",
            self.lexeme, self.line, self.suggestion
        )
    }
}

/// Supplies replacement lexemes during recovery
///
/// `None` means no replacement is coming: the responder is absent, its input
/// ended, or it failed. The driver then emits an error token.
pub trait Responder {
    fn respond(&mut self, prompt: &RecoveryPrompt) -> Option<String>;
}

impl<T: Responder + ?Sized> Responder for &mut T {
    fn respond(&mut self, prompt: &RecoveryPrompt) -> Option<String> {
        (**self).respond(prompt)
    }
}

// ============================================================================
// CONSOLE RESPONDER
// ============================================================================

/// Prompts on a writer and reads one whitespace-delimited word per reply
///
/// Extra words typed on the same line are queued and answer later prompts.
pub struct ConsoleResponder<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleResponder<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Next word from input, reading more lines as needed
    fn next_word(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(Some(word));
            }

            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(buffer.split_whitespace().map(str::to_string));
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Responder for ConsoleResponder<R, W> {
    fn respond(&mut self, prompt: &RecoveryPrompt) -> Option<String> {
        let shown = write!(self.output, "{}", prompt).and_then(|_| self.output.flush());
        if let Err(e) = shown {
            log_warning!(
                crate::logging::codes::lexical::RESPONDER_UNAVAILABLE,
                format!("Could not show recovery prompt: {}", e),
                "lexeme" => &prompt.lexeme
            );
            return None;
        }

        match self.next_word() {
            Ok(word) => word,
            Err(e) => {
                log_warning!(
                    crate::logging::codes::lexical::RESPONDER_UNAVAILABLE,
                    format!("Could not read replacement: {}", e),
                    "lexeme" => &prompt.lexeme
                );
                None
            }
        }
    }
}

// ============================================================================
// NON-INTERACTIVE RESPONDERS
// ============================================================================

/// Replays canned replies and remembers every prompt it saw
#[derive(Debug, Default, Clone)]
pub struct ScriptedResponder {
    replies: VecDeque<String>,
    prompts: Vec<RecoveryPrompt>,
}

impl ScriptedResponder {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[RecoveryPrompt] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Responder for ScriptedResponder {
    fn respond(&mut self, prompt: &RecoveryPrompt) -> Option<String> {
        self.prompts.push(prompt.clone());
        self.replies.pop_front()
    }
}

/// Declines every prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResponder;

impl Responder for NoResponder {
    fn respond(&mut self, _prompt: &RecoveryPrompt) -> Option<String> {
        None
    }
}
