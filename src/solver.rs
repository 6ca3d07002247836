//! The solver: composes segment matches into complete dictionary words.
//!
//! [`PatternWalk`] chains the letter-pool matcher across a pattern's
//! segments, threading the trie node and accumulated prefix from one
//! segment into the next. Because every step is filtered by tree-edge
//! existence, no letter choice is explored that cannot still lead to a
//! dictionary word of the pattern's exact total length — each half of a
//! multi-segment pattern is only ever validated as part of a whole word,
//! never independently.
//!
//! [`solve_pattern`] is the driver entry point used by the CLI and WASM
//! layers: it parses the query text, runs the walk against the index, and
//! collects results up to a requested cap under a time budget. The core
//! walk itself is uncapped and lazy; cancellation is just ceasing to pull.
//!
//! # Examples
//!
//! ```
//! use rackfit::solver;
//! use rackfit::trie::DictionaryIndex;
//!
//! let index = DictionaryIndex::build(["cat", "act", "car"]);
//! let result = solver::solve_pattern("3:act", &index, 10)?;
//!
//! assert_eq!(result.matches, vec!["act", "cat"]);
//! # Ok::<(), rackfit::solver::SolverError>(())
//! ```

use crate::errors::ParseError;
use crate::matcher::PoolWalk;
use crate::parser::parse_pattern;
use crate::patterns::Pattern;
use crate::trie::{DictionaryIndex, TrieNode};
use instant::Instant;
use log::debug;
use std::time::Duration;

// The amount of time (in seconds) we allow a query to run
const TIME_BUDGET: u64 = 30;

/// Status of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// The search space was fully enumerated before the cap was hit.
    SearchExhausted,

    /// Solver stopped early because the requested number of results was found.
    FoundEnough,

    /// Solver stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Successful solver run (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Matched words, in enumeration order (may be fewer than requested).
    pub matches: Vec<String>,
    /// Status indicating whether we finished, capped, or timed out.
    pub status: SolveStatus,
}

/// Unified error type for the solver pipeline.
///
/// The matcher itself has no failure surface — empty search spaces are
/// results, not errors — so the only thing that can go wrong is malformed
/// query text.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Failure during parsing of the query string into a `Pattern`.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "S001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "Query parsing failed",
        }
    }

    /// Formats the error with code and help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                // delegate to ParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
        }
    }
}

/// Lazy enumeration of every word matching `pattern`, in deterministic
/// enumeration order.
///
/// Maintains one suspended [`PoolWalk`] per segment depth. When the walk
/// at the deepest level produces a pair, either the pattern is complete
/// (yield the word) or a walk for the next segment is pushed, starting
/// from the reached node with the accumulated prefix. When a walk runs
/// dry, the one above it resumes.
pub struct PatternWalk<'t> {
    pattern: Pattern,
    walks: Vec<PoolWalk<'t>>,
}

impl<'t> PatternWalk<'t> {
    /// Set up a walk for `pattern` against `index`.
    ///
    /// If the index holds no words at the pattern's total length, the walk
    /// is empty from the start — no match is possible at that length.
    pub fn new(pattern: Pattern, index: &'t DictionaryIndex) -> Self {
        let walks = match index.root_for(pattern.total_length()) {
            Some(root) => vec![first_segment_walk(&pattern, root)],
            None => vec![],
        };
        PatternWalk { pattern, walks }
    }
}

fn first_segment_walk<'t>(pattern: &Pattern, root: &'t TrieNode) -> PoolWalk<'t> {
    let seg = &pattern.segments()[0];
    PoolWalk::new(String::new(), root, seg.pool().clone(), seg.length())
}

impl<'t> Iterator for PatternWalk<'t> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.walks.len().checked_sub(1)?;
            match self.walks[depth].next() {
                Some((word, node)) => {
                    if depth + 1 == self.pattern.segments().len() {
                        // Last segment: the word spans the full pattern
                        // length, and reaching this node at that depth in
                        // the per-length tree makes it a dictionary word.
                        return Some(word);
                    }
                    let seg = &self.pattern.segments()[depth + 1];
                    self.walks
                        .push(PoolWalk::new(word, node, seg.pool().clone(), seg.length()));
                }
                None => {
                    self.walks.pop();
                }
            }
        }
    }
}

/// Parse `input` and enumerate matches against `index`, collecting up to
/// `num_results_requested` words.
///
/// The underlying enumeration is lazy; this driver is where the cap and
/// the time budget live. The budget is checked between pulls, which is
/// only possible because the core never materializes the search space.
///
/// # Errors
///
/// `SolverError::ParseFailure` if `input` is not a valid pattern.
pub fn solve_pattern(
    input: &str,
    index: &DictionaryIndex,
    num_results_requested: usize,
) -> Result<SolveResult, SolverError> {
    let pattern = parse_pattern(input)?;
    debug!(
        "solving {} segment(s), total length {}",
        pattern.segments().len(),
        pattern.total_length()
    );

    let budget = Duration::from_secs(TIME_BUDGET);
    let start = Instant::now();

    let mut walk = PatternWalk::new(pattern, index);
    let mut matches = Vec::new();
    let status = loop {
        if matches.len() >= num_results_requested {
            break SolveStatus::FoundEnough;
        }
        let elapsed = start.elapsed();
        if elapsed > budget {
            break SolveStatus::TimedOut { elapsed };
        }
        match walk.next() {
            Some(word) => matches.push(word),
            None => break SolveStatus::SearchExhausted,
        }
    };

    debug!("found {} match(es), status {status:?}", matches.len());
    Ok(SolveResult { matches, status })
}
