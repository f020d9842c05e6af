//! L-system string generator.
//!
//! Rewrites a seed word (axiom) into a longer command string by applying
//! production rules over a fixed number of passes. Two modes:
//!
//! - **0-context**: each character is looked up in the rule table on its own.
//! - **1-context**: lookups use a two-character window of left context. The
//!   first character of the word is keyed by `environment + word[0]`, and
//!   that rule must exist; every later character at position `i` is keyed by
//!   `word[i-1] + word[i]` and passes through unchanged when no rule matches.
//!
//! The windows of 1-context mode overlap: each character is read once as the
//! right element of a window and once as the left element of the next. This
//! is part of the grammar semantics and must not be "fixed".
//!
//! Rewriting runs as an explicit loop over passes, each pass building a new
//! word from the previous one; large iteration counts never touch the stack.

use rustc_hash::FxHashMap;

use crate::engine_bail;
use crate::error::Result;

/// Context-sensitive L-system word generator.
///
/// Constructed with an alphabet, an axiom, an immutable rule table, the
/// number of rewriting passes, and an optional environmental context symbol
/// that switches the generator from 0-context to 1-context mode.
pub struct GrammarGenerator {
    alphabet: String,
    axiom: String,
    rules: FxHashMap<String, String>,
    iterations: u32,
    environment: Option<char>,
    word: String,
}

impl GrammarGenerator {
    /// Create a generator.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The symbol alphabet the command string draws from
    /// * `axiom` - Seed word
    /// * `rules` - Production rules: 1- or 2-character pattern to replacement
    /// * `iterations` - Number of rewriting passes applied by [`generate`](Self::generate)
    /// * `environment` - Environmental context symbol; `Some` selects 1-context mode
    pub fn new(
        alphabet: &str,
        axiom: &str,
        rules: FxHashMap<String, String>,
        iterations: u32,
        environment: Option<char>,
    ) -> Self {
        Self {
            alphabet: alphabet.to_string(),
            axiom: axiom.to_string(),
            rules,
            iterations,
            environment,
            word: axiom.to_string(),
        }
    }

    /// Run all rewriting passes, starting from the axiom.
    ///
    /// Always rebuilds from the axiom, so repeated calls are deterministic.
    /// With `iterations == 0` the result is the axiom unchanged.
    ///
    /// # Errors
    ///
    /// In 1-context mode, a missing rule for `environment + word[0]` aborts
    /// the pass with a grammar error; no partial word is kept.
    pub fn generate(&mut self) -> Result<&str> {
        let mut word = self.axiom.clone();
        for _ in 0..self.iterations {
            word = match self.environment {
                Some(environment) => Self::rewrite_with_context(&word, environment, &self.rules)?,
                None => Self::rewrite(&word, &self.rules),
            };
        }
        self.word = word;
        Ok(&self.word)
    }

    /// The most recently generated word (the axiom before [`generate`](Self::generate) runs).
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The alphabet this generator was constructed with.
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// The number of rewriting passes.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// 0-context pass: single-character lookup, unmatched characters pass through.
    fn rewrite(word: &str, rules: &FxHashMap<String, String>) -> String {
        let mut next = String::with_capacity(word.len() * 2);
        let mut key = String::with_capacity(1);
        for symbol in word.chars() {
            key.clear();
            key.push(symbol);
            match rules.get(&key) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        next
    }

    /// 1-context pass: two-character window of (previous, current), seeded
    /// with the environmental symbol as the left context of the first
    /// character. The left element is always the character of the *input*
    /// word, never of a replacement.
    fn rewrite_with_context(
        word: &str,
        environment: char,
        rules: &FxHashMap<String, String>,
    ) -> Result<String> {
        let mut next = String::with_capacity(word.len() * 2);
        let mut previous = environment;
        let mut key = String::with_capacity(2);
        for (position, symbol) in word.chars().enumerate() {
            key.clear();
            key.push(previous);
            key.push(symbol);
            match rules.get(&key) {
                Some(replacement) => next.push_str(replacement),
                None if position == 0 => {
                    engine_bail!(
                        "flora3d::GrammarGenerator",
                        GrammarError,
                        "no production rule for environmental context '{}'",
                        key
                    );
                }
                None => next.push(symbol),
            }
            previous = symbol;
        }
        Ok(next)
    }
}

#[cfg(test)]
#[path = "grammar_generator_tests.rs"]
mod tests;
