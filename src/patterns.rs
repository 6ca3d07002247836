//! Shared value types for queries: the letter pool, the segment, and the
//! pattern.
//!
//! Validation happens here, at construction time: a zero-length segment or
//! an empty pattern is malformed input and fails fast with a
//! [`ParseError`]. A pool *smaller* than its segment's length is not an
//! error — it just can't match anything, and the search reports that as an
//! empty result. A pool *larger* than the length is intentional: the
//! matcher picks a subset ("these letters are available, but the chunk is
//! short").

use crate::errors::ParseError;

/// A sorted multiset of letters available to one segment.
///
/// Kept sorted at all times so the matcher can detect adjacent duplicate
/// letters in O(1) per step. Removal is by position, not by value, so
/// repeated letters are handled correctly: removing one occurrence leaves
/// the rest of the pool sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Collect letters into a pool, sorting them.
    pub fn new<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut letters: Vec<char> = letters.into_iter().collect();
        letters.sort_unstable();
        LetterPool { letters }
    }

    /// The letters in sorted order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The pool with the occurrence at position `i` removed.
    ///
    /// Removing by position preserves sortedness of the remainder, and —
    /// unlike removal by value — does the right thing when the same letter
    /// appears more than once.
    pub(crate) fn without(&self, i: usize) -> LetterPool {
        debug_assert!(i < self.letters.len());
        let mut letters = Vec::with_capacity(self.letters.len() - 1);
        letters.extend_from_slice(&self.letters[..i]);
        letters.extend_from_slice(&self.letters[i + 1..]);
        LetterPool { letters }
    }
}

/// One chunk of the target word: a required length plus the pool of
/// letters that chunk may draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    length: usize,
    pool: LetterPool,
}

impl Segment {
    /// Construct a segment, rejecting a zero required length.
    ///
    /// # Errors
    ///
    /// `ParseError::ZeroSegmentLength` if `length == 0`.
    pub fn new(length: usize, pool: LetterPool) -> Result<Self, Box<ParseError>> {
        if length == 0 {
            return Err(Box::new(ParseError::ZeroSegmentLength));
        }
        Ok(Segment { length, pool })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// A segment whose pool is smaller than its length can never be
    /// satisfied. Not an error — the search just yields nothing.
    pub fn is_satisfiable(&self) -> bool {
        self.pool.len() >= self.length
    }
}

/// The ordered sequence of segments composing the full target word.
///
/// Order is significant: segments are matched left-to-right against
/// successive depths of the dictionary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Construct a pattern, rejecting an empty segment list.
    ///
    /// # Errors
    ///
    /// `ParseError::EmptyPattern` if `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> Result<Self, Box<ParseError>> {
        if segments.is_empty() {
            return Err(Box::new(ParseError::EmptyPattern));
        }
        Ok(Pattern { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Combined required length of all segments — the length of every word
    /// this pattern can match.
    pub fn total_length(&self) -> usize {
        self.segments.iter().map(Segment::length).sum()
    }
}
