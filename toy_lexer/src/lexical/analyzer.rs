//! Line driver
//!
//! Splits each input line on whitespace, classifies every lexeme in isolation
//! and renders the tokens back out one output line per input line. A lexeme
//! nothing accepts goes through recovery: a close vocabulary match is offered
//! to the responder, and its reply is classified in place of the rejected lexeme.

use super::classifier::{self, Classification};
use super::error::LexerError;
use super::recovery::{RecoveryPrompt, Responder};
use super::suggest::suggest;
use crate::config::compile_time::lexical::MAX_RECOVERY_ATTEMPTS;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::symbols::IdentifierInterner;
use crate::tokens::{Token, TokenCategory, TokenLine};
use crate::utils::{Located, Location};
use std::io::{self, BufRead, Write};

/// Counters for one tokenization run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_lexemes: usize,
    pub symbol_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub integer_tokens: usize,
    pub float_tokens: usize,
    pub error_tokens: usize,

    pub recovery_prompts: usize,
    pub accepted_recoveries: usize,
    pub declined_recoveries: usize,
    pub suggestions_offered: usize,
    pub numeric_clamps: usize,
    pub lines_processed: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token) {
        match token {
            Token::Symbol(_) => self.symbol_tokens += 1,
            Token::Keyword(_) => self.keyword_tokens += 1,
            Token::Identifier(_) => self.identifier_tokens += 1,
            Token::IntNum(_) => self.integer_tokens += 1,
            Token::FloatNum(_) => self.float_tokens += 1,
            Token::Unknown { .. } => self.error_tokens += 1,
        }
    }

    pub fn token_count(&self) -> usize {
        self.symbol_tokens
            + self.keyword_tokens
            + self.identifier_tokens
            + self.integer_tokens
            + self.float_tokens
            + self.error_tokens
    }
}

/// Every line of a source, tokenized
#[derive(Debug, Clone, Default)]
pub struct TokenizedSource {
    pub lines: Vec<TokenLine>,
    /// Lexeme-level failures, in the order they happened
    pub diagnostics: Vec<LexerError>,
}

impl TokenizedSource {
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(TokenLine::len).sum()
    }

    pub fn error_count(&self) -> usize {
        self.lines.iter().map(TokenLine::error_count).sum()
    }

    /// Output text: one rendered line per input line, each ending in `\n`
    pub fn render(&self, style: crate::tokens::RenderStyle) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.render(style));
            out.push('\n');
        }
        out
    }
}

/// Split a line into whitespace-delimited lexemes with 1-based char columns
pub fn segment(line: &str, line_no: usize) -> Vec<Located<&str>> {
    let mut lexemes = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (index, (offset, ch)) in line.char_indices().enumerate() {
        if ch.is_whitespace() {
            if let Some((begin, column)) = start.take() {
                lexemes.push(Located::new(
                    &line[begin..offset],
                    Location::new(line_no, column),
                ));
            }
        } else if start.is_none() {
            start = Some((offset, index + 1));
        }
    }

    if let Some((begin, column)) = start {
        lexemes.push(Located::new(&line[begin..], Location::new(line_no, column)));
    }

    lexemes
}

pub struct LexicalAnalyzer {
    interner: IdentifierInterner,
    metrics: LexicalMetrics,
    diagnostics: Vec<LexerError>,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            interner: IdentifierInterner::new(),
            metrics: LexicalMetrics::default(),
            diagnostics: Vec::new(),
            preferences,
        }
    }

    pub fn interner(&self) -> &IdentifierInterner {
        &self.interner
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn diagnostics(&self) -> &[LexerError] {
        &self.diagnostics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }

    /// Classify one lexeme against this analyzer's interner, without recovery
    pub fn classify(&mut self, lexeme: &str) -> Classification {
        let (classification, overflow) =
            classifier::classify_with_diagnostics(lexeme, &mut self.interner);
        if let Some(error) = overflow {
            self.metrics.numeric_clamps += 1;
            self.diagnostics.push(error);
        }
        classification
    }

    // ========================================================================
    // Per-lexeme recovery loop
    // ========================================================================

    /// Classify a lexeme, recovering through `responder` if nothing accepts it
    ///
    /// Recovery is bounded by `MAX_RECOVERY_ATTEMPTS` prompts. Every path ends
    /// in a token; failures become `Token::Unknown` for the last lexeme tried.
    pub fn analyze_lexeme<R: Responder + ?Sized>(
        &mut self,
        lexeme: &str,
        location: Location,
        responder: &mut R,
    ) -> Token {
        self.metrics.total_lexemes += 1;

        let line = location.line;
        let mut current = lexeme.to_string();
        let mut attempts = 0;

        let token = loop {
            if let Classification::Accepted(token) = self.classify(&current) {
                if attempts > 0 {
                    self.metrics.accepted_recoveries += 1;
                    log_success!(codes::success::RECOVERY_ACCEPTED,
                        format!("Replaced '{}' with '{}'", lexeme, current),
                        location = location,
                        "attempts" => attempts,
                        "kind" => token.kind_name()
                    );
                }
                break token;
            }

            let miss = LexerError::ClassificationMiss {
                lexeme: current.clone(),
                line,
            };
            log_warning!(miss.error_code(), miss.to_string(), location = location);
            self.diagnostics.push(miss);

            let Some(suggestion) = suggest(&current) else {
                break self.give_up(
                    LexerError::NoSuggestionAvailable {
                        lexeme: current,
                        line,
                    },
                    location,
                );
            };

            if attempts >= MAX_RECOVERY_ATTEMPTS {
                break self.give_up(
                    LexerError::RecoveryLimitExceeded {
                        lexeme: current,
                        line,
                        attempts,
                    },
                    location,
                );
            }

            attempts += 1;
            self.metrics.suggestions_offered += 1;
            log_success!(codes::success::SUGGESTION_OFFERED,
                format!("Suggested '{}' for '{}'", suggestion.text, current),
                location = location,
                "distance" => suggestion.distance,
                "attempt" => attempts
            );

            let prompt = RecoveryPrompt {
                lexeme: current.clone(),
                line,
                suggestion: suggestion.text,
                attempt: attempts,
            };
            self.metrics.recovery_prompts += 1;

            match responder.respond(&prompt) {
                Some(reply) => current = reply,
                None => {
                    self.metrics.declined_recoveries += 1;
                    break self.give_up(
                        LexerError::RecoveryDeclined {
                            lexeme: current,
                            line,
                        },
                        location,
                    );
                }
            }
        };

        self.metrics.record_token(&token);
        token
    }

    fn give_up(&mut self, error: LexerError, location: Location) -> Token {
        log_warning!(error.error_code(), error.to_string(), location = location);

        let token = match &error {
            LexerError::NoSuggestionAvailable { lexeme, line }
            | LexerError::RecoveryLimitExceeded { lexeme, line, .. }
            | LexerError::RecoveryDeclined { lexeme, line }
            | LexerError::ClassificationMiss { lexeme, line } => Token::Unknown {
                lexeme: lexeme.clone(),
                line: *line,
            },
            LexerError::NumericOverflow { lexeme, .. } => Token::Unknown {
                lexeme: lexeme.clone(),
                line: location.line,
            },
        };

        self.diagnostics.push(error);
        token
    }

    // ========================================================================
    // Lines and sources
    // ========================================================================

    pub fn analyze_line<R: Responder + ?Sized>(
        &mut self,
        line: &str,
        line_no: usize,
        responder: &mut R,
    ) -> TokenLine {
        let mut tokens = Vec::new();
        for lexeme in segment(line, line_no) {
            tokens.push(self.analyze_lexeme(lexeme.value, lexeme.location, responder));
        }

        self.metrics.lines_processed += 1;
        let token_line = TokenLine::new(line_no, tokens);

        if self.preferences.collect_detailed_metrics {
            log_debug!("Line tokenized",
                "line" => line_no,
                "tokens" => token_line.len(),
                "identifiers" => token_line.count_category(TokenCategory::Identifier),
                "numbers" => token_line.count_category(TokenCategory::Numeric),
                "errors" => token_line.error_count()
            );
        }

        token_line
    }

    pub fn render_line(&self, tokens: &TokenLine) -> String {
        tokens.render(self.preferences.render_style)
    }

    /// Tokenize a whole source as one run with a fresh interner
    pub fn tokenize_source<R: Responder + ?Sized>(
        &mut self,
        source: &str,
        responder: &mut R,
    ) -> TokenizedSource {
        self.begin_run();

        let lines = source
            .lines()
            .enumerate()
            .map(|(index, line)| self.analyze_line(line, index + 1, responder))
            .collect();

        self.log_completion();

        TokenizedSource {
            lines,
            diagnostics: self.diagnostics.clone(),
        }
    }

    /// Tokenize line by line, writing each rendered line as soon as it is ready
    ///
    /// Output is flushed after every line so it interleaves with prompts.
    /// Returns the number of lines written.
    pub fn tokenize_reader<I, W, R>(
        &mut self,
        mut reader: I,
        mut writer: W,
        responder: &mut R,
    ) -> io::Result<usize>
    where
        I: BufRead,
        W: Write,
        R: Responder + ?Sized,
    {
        self.begin_run();

        let mut buffer = String::new();
        let mut line_no = 0;

        loop {
            buffer.clear();
            if reader.read_line(&mut buffer)? == 0 {
                break;
            }
            line_no += 1;

            let line = buffer
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(&buffer);

            let token_line = self.analyze_line(line, line_no, responder);
            writeln!(writer, "{}", self.render_line(&token_line))?;
            writer.flush()?;
        }

        self.log_completion();
        Ok(line_no)
    }

    fn begin_run(&mut self) {
        self.interner = IdentifierInterner::new();
        self.metrics = LexicalMetrics::default();
        self.diagnostics.clear();

        log_debug!("Starting lexical analysis",
            "render_style" => format!("{:?}", self.preferences.render_style),
            "max_recovery_attempts" => MAX_RECOVERY_ATTEMPTS
        );
    }

    fn log_completion(&self) {
        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "lines" => self.metrics.lines_processed,
            "tokens" => self.metrics.token_count(),
            "error_tokens" => self.metrics.error_tokens,
            "identifiers" => self.interner.len(),
            "recovery_prompts" => self.metrics.recovery_prompts,
            "accepted_recoveries" => self.metrics.accepted_recoveries,
            "numeric_clamps" => self.metrics.numeric_clamps
        );
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::recovery::{NoResponder, ScriptedResponder};
    use crate::tokens::RenderStyle;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    fn canonical() -> LexicalAnalyzer {
        LexicalAnalyzer::with_preferences(LexicalPreferences {
            render_style: RenderStyle::Canonical,
            interactive_recovery: true,
            collect_detailed_metrics: true,
        })
    }

    #[test]
    fn test_segment_columns() {
        let lexemes = segment("  if\t_x  >=3", 7);
        let found: Vec<_> = lexemes
            .iter()
            .map(|l| (l.value, l.location.line, l.location.column))
            .collect();

        assert_eq!(found, vec![("if", 7, 3), ("_x", 7, 6), (">=3", 7, 10)]);
        assert!(segment(" \t ", 1).is_empty());
    }

    #[test]
    fn test_source_scenarios() {
        let mut analyzer = canonical();
        let result =
            analyzer.tokenize_source("proc _foo <- 10\nif _x >= 3.14\n", &mut NoResponder);

        assert_eq!(
            result.render(RenderStyle::Canonical),
            "<KW_PROC> <ID: 1> <ASSIGN> <INTNUM: 10>\n<KW_IF> <ID: 2> <GEQ> <FLOATNUM: 3.14>\n"
        );
        assert_eq!(result.token_count(), 8);
        assert_eq!(result.error_count(), 0);
        assert_eq!(analyzer.interner().len(), 2);
        assert_eq!(analyzer.metrics().lines_processed, 2);
    }

    #[test]
    fn test_identifiers_share_ids_across_lines() {
        let mut analyzer = canonical();
        let result = analyzer.tokenize_source("_a _b\n_b _a _c", &mut NoResponder);

        assert_eq!(
            result.render(RenderStyle::Canonical),
            "<ID: 1> <ID: 2>\n<ID: 2> <ID: 1> <ID: 3>\n"
        );
    }

    #[test]
    fn test_suggestion_then_error_without_responder() {
        let mut analyzer = canonical();
        let mut responder = ScriptedResponder::default();
        let token = analyzer.analyze_lexeme("fi", Location::new(3, 1), &mut responder);

        assert_eq!(responder.prompts().len(), 1);
        assert_eq!(responder.prompts()[0].suggestion, "if");
        assert_eq!(token.to_string(), "<ERROR_TOKEN \"fi\" at line 3>");
        assert_eq!(analyzer.metrics().suggestions_offered, 1);
        assert_eq!(analyzer.metrics().declined_recoveries, 1);
        assert_matches!(
            analyzer.diagnostics().last(),
            Some(LexerError::RecoveryDeclined { line: 3, .. })
        );
    }

    #[test]
    fn test_distant_lexeme_never_prompts() {
        let mut analyzer = canonical();
        let mut responder = ScriptedResponder::new(["if"]);
        let line = analyzer.analyze_line("@@@@@ run", 5, &mut responder);

        assert_eq!(
            analyzer.render_line(&line),
            "<ERROR_TOKEN \"@@@@@\" at line 5> <KW_RUN>"
        );
        assert!(responder.prompts().is_empty());
        assert_eq!(responder.remaining(), 1);
        assert_matches!(
            analyzer.diagnostics().last(),
            Some(LexerError::NoSuggestionAvailable { .. })
        );
    }

    #[test]
    fn test_scripted_recovery() {
        let mut analyzer = canonical();
        let mut responder = ScriptedResponder::new(["iff", "if"]);
        let line = analyzer.analyze_line("fi _x", 1, &mut responder);

        assert_eq!(analyzer.render_line(&line), "<KW_IF> <ID: 1>");

        let prompts = responder.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].lexeme, "fi");
        assert_eq!(prompts[1].lexeme, "iff");
        assert_eq!(prompts[1].attempt, 2);

        let metrics = analyzer.metrics();
        assert_eq!(metrics.recovery_prompts, 2);
        assert_eq!(metrics.accepted_recoveries, 1);
        assert_eq!(metrics.error_tokens, 0);
    }

    #[test]
    fn test_recovery_is_bounded() {
        let mut analyzer = canonical();
        let mut responder =
            ScriptedResponder::new(std::iter::repeat("fi").take(MAX_RECOVERY_ATTEMPTS + 5));
        let token = analyzer.analyze_lexeme("fi", Location::new(1, 1), &mut responder);

        assert_eq!(responder.prompts().len(), MAX_RECOVERY_ATTEMPTS);
        assert_eq!(
            token,
            Token::Unknown {
                lexeme: "fi".to_string(),
                line: 1
            }
        );
        assert_matches!(
            analyzer.diagnostics().last(),
            Some(LexerError::RecoveryLimitExceeded { attempts, .. }) if *attempts == MAX_RECOVERY_ATTEMPTS
        );
    }

    #[test]
    fn test_empty_lines_produce_empty_output_lines() {
        let mut analyzer = canonical();
        let result = analyzer.tokenize_source("run\n\n   \nvar", &mut NoResponder);

        assert_eq!(result.lines.len(), 4);
        assert_eq!(
            result.render(RenderStyle::Canonical),
            "<KW_RUN>\n\n\n<KW_VAR>\n"
        );
        assert!(analyzer
            .tokenize_source("", &mut NoResponder)
            .lines
            .is_empty());
    }

    #[test]
    fn test_numeric_clamp_is_counted() {
        let mut analyzer = canonical();
        let line = analyzer.analyze_line("99999999999999999999999", 1, &mut NoResponder);

        assert_eq!(
            analyzer.render_line(&line),
            format!("<INTNUM: {}>", u64::MAX)
        );
        assert_eq!(analyzer.metrics().numeric_clamps, 1);
        assert_matches!(
            analyzer.diagnostics(),
            [LexerError::NumericOverflow { .. }]
        );
    }

    #[test]
    fn test_echo_style() {
        let mut analyzer = LexicalAnalyzer::with_preferences(LexicalPreferences {
            render_style: RenderStyle::Echo,
            interactive_recovery: false,
            collect_detailed_metrics: false,
        });
        let line = analyzer.analyze_line("proc <- 1", 1, &mut NoResponder);

        assert_eq!(
            analyzer.render_line(&line),
            "<KW_PROC: \"proc\"> <ASSIGN: \"<-\"> <INTNUM: 1>"
        );
    }

    #[test]
    fn test_tokenize_reader_streams_crlf_input() {
        let mut analyzer = canonical();
        let mut output = Vec::new();
        let lines = analyzer
            .tokenize_reader(
                Cursor::new("proc _a\r\n_a\r\n\n"),
                &mut output,
                &mut NoResponder,
            )
            .unwrap();

        assert_eq!(lines, 3);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<KW_PROC> <ID: 1>\n<ID: 1>\n\n"
        );
    }

    #[test]
    fn test_each_run_starts_fresh() {
        let mut analyzer = canonical();
        analyzer.tokenize_source("_a _b", &mut NoResponder);
        let second = analyzer.tokenize_source("_b", &mut NoResponder);

        assert_eq!(second.render(RenderStyle::Canonical), "<ID: 1>\n");
        assert_eq!(analyzer.metrics().total_lexemes, 1);
    }
}
