//! Deterministic automata recognizing whole lexemes
//!
//! An automaton accepts only when it sits in an accepting state exactly as
//! the input runs out. The dead state is absorbing: once entered, no further
//! input can lead back to acceptance.

/// A DFA over the characters of a single lexeme
pub trait Automaton {
    type State: Copy + Eq + std::fmt::Debug;

    fn start(&self) -> Self::State;

    fn step(&self, state: Self::State, ch: char) -> Self::State;

    fn is_accepting(&self, state: Self::State) -> bool;

    fn is_dead(&self, state: Self::State) -> bool;

    /// Run the automaton over `input`, stopping early once dead
    fn accepts(&self, input: &str) -> bool {
        let mut state = self.start();
        for ch in input.chars() {
            state = self.step(state, ch);
            if self.is_dead(state) {
                return false;
            }
        }
        self.is_accepting(state)
    }
}

// ============================================================================
// LITERAL AUTOMATON
// ============================================================================

/// Walks a fixed spelling one character at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralAutomaton {
    literal: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralState {
    /// Byte offset into the literal matched so far
    Matched(usize),
    Dead,
}

impl LiteralAutomaton {
    pub const fn new(literal: &'static str) -> Self {
        Self { literal }
    }

    pub fn literal(&self) -> &'static str {
        self.literal
    }
}

impl Automaton for LiteralAutomaton {
    type State = LiteralState;

    fn start(&self) -> LiteralState {
        LiteralState::Matched(0)
    }

    fn step(&self, state: LiteralState, ch: char) -> LiteralState {
        match state {
            LiteralState::Matched(offset) if self.literal[offset..].starts_with(ch) => {
                LiteralState::Matched(offset + ch.len_utf8())
            }
            _ => LiteralState::Dead,
        }
    }

    fn is_accepting(&self, state: LiteralState) -> bool {
        state == LiteralState::Matched(self.literal.len())
    }

    fn is_dead(&self, state: LiteralState) -> bool {
        state == LiteralState::Dead
    }
}

// ============================================================================
// SHAPE AUTOMATA
// ============================================================================

/// `_` followed by any number of `[a-z_]`
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierAutomaton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierState {
    Start,
    Body,
    Dead,
}

impl Automaton for IdentifierAutomaton {
    type State = IdentifierState;

    fn start(&self) -> IdentifierState {
        IdentifierState::Start
    }

    fn step(&self, state: IdentifierState, ch: char) -> IdentifierState {
        match (state, ch) {
            (IdentifierState::Start, '_') => IdentifierState::Body,
            (IdentifierState::Body, 'a'..='z' | '_') => IdentifierState::Body,
            _ => IdentifierState::Dead,
        }
    }

    fn is_accepting(&self, state: IdentifierState) -> bool {
        state == IdentifierState::Body
    }

    fn is_dead(&self, state: IdentifierState) -> bool {
        state == IdentifierState::Dead
    }
}

/// One or more ASCII decimal digits
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerAutomaton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerState {
    Start,
    Digits,
    Dead,
}

impl Automaton for IntegerAutomaton {
    type State = IntegerState;

    fn start(&self) -> IntegerState {
        IntegerState::Start
    }

    fn step(&self, state: IntegerState, ch: char) -> IntegerState {
        match state {
            IntegerState::Start | IntegerState::Digits if ch.is_ascii_digit() => {
                IntegerState::Digits
            }
            _ => IntegerState::Dead,
        }
    }

    fn is_accepting(&self, state: IntegerState) -> bool {
        state == IntegerState::Digits
    }

    fn is_dead(&self, state: IntegerState) -> bool {
        state == IntegerState::Dead
    }
}

/// Digits, a single `.`, then at least one digit
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatAutomaton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatState {
    Start,
    Whole,
    Point,
    Fraction,
    Dead,
}

impl Automaton for FloatAutomaton {
    type State = FloatState;

    fn start(&self) -> FloatState {
        FloatState::Start
    }

    fn step(&self, state: FloatState, ch: char) -> FloatState {
        match (state, ch) {
            (FloatState::Start | FloatState::Whole, '0'..='9') => FloatState::Whole,
            (FloatState::Whole, '.') => FloatState::Point,
            (FloatState::Point | FloatState::Fraction, '0'..='9') => FloatState::Fraction,
            _ => FloatState::Dead,
        }
    }

    fn is_accepting(&self, state: FloatState) -> bool {
        state == FloatState::Fraction
    }

    fn is_dead(&self, state: FloatState) -> bool {
        state == FloatState::Dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_requires_exact_match() {
        let assign = LiteralAutomaton::new("<-");

        assert!(assign.accepts("<-"));
        assert!(!assign.accepts("<"));
        assert!(!assign.accepts("<--"));
        assert!(!assign.accepts(""));
        assert!(!assign.accepts("<é"));
    }

    #[test]
    fn test_literal_dead_state_is_absorbing() {
        let kw = LiteralAutomaton::new("if");
        let dead = kw.step(kw.start(), 'x');

        assert!(kw.is_dead(dead));
        assert!(kw.is_dead(kw.step(dead, 'i')));
    }

    #[test]
    fn test_identifier_shape() {
        let id = IdentifierAutomaton;

        assert!(id.accepts("_"));
        assert!(id.accepts("_foo"));
        assert!(id.accepts("__a_b"));
        assert!(!id.accepts("foo"));
        assert!(!id.accepts("_Foo"));
        assert!(!id.accepts("_a1"));
        assert!(!id.accepts(""));
    }

    #[test]
    fn test_integer_shape() {
        let int = IntegerAutomaton;

        assert!(int.accepts("0"));
        assert!(int.accepts("007"));
        assert!(!int.accepts(""));
        assert!(!int.accepts("1.0"));
        assert!(!int.accepts("-1"));
        assert!(!int.accepts("١٢"));
    }

    #[test]
    fn test_float_shape() {
        let float = FloatAutomaton;

        assert!(float.accepts("3.14"));
        assert!(float.accepts("0.0"));
        assert!(!float.accepts("3."));
        assert!(!float.accepts(".5"));
        assert!(!float.accepts("1.2.3"));
        assert!(!float.accepts("10"));
    }
}
