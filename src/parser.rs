//! Query-text parsing: user input → [`Pattern`].
//!
//! A query is a whitespace-separated list of segment tokens. Each token is
//! either:
//!
//! - `<length>:<letters>` — an explicit target length with a pool of
//!   available letters (the pool may be smaller or larger than the
//!   length), e.g. `3:acts`;
//! - a bare letter run, e.g. `act` — the target length is the run's own
//!   length.
//!
//! Letters are case-folded and each pool is sorted before it becomes a
//! segment, so the matcher can rely on the sorted-pool invariant. A
//! zero-length segment or an empty query fails fast here; a pool that is
//! merely too small for its length does not (that's an empty result, not
//! an error).

use crate::errors::ParseError;
use crate::patterns::{LetterPool, Pattern, Segment};
use nom::{
    character::complete::{char, digit1},
    IResult, Parser,
};

/// Parser result type: input, output, with our custom `ParseError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

/// Parse the `<length>:` prefix of an explicit segment token, returning
/// the raw digit run and the rest of the token.
fn length_prefix(input: &str) -> PResult<'_, &str> {
    let (rest, (digits, _)) = (digit1, char(':')).parse(input)?;
    Ok((rest, digits))
}

/// Validate and case-fold the letters of a pool.
fn pool_letters(s: &str) -> Result<LetterPool, Box<ParseError>> {
    let mut letters = Vec::with_capacity(s.len());
    for c in s.chars() {
        if !c.is_alphabetic() {
            return Err(Box::new(ParseError::InvalidLetter { invalid_char: c }));
        }
        letters.extend(c.to_lowercase());
    }
    Ok(LetterPool::new(letters))
}

/// Parse one whitespace-delimited token into a [`Segment`].
fn parse_segment(token: &str) -> Result<Segment, Box<ParseError>> {
    match length_prefix(token) {
        Ok((letters_part, digits)) => {
            let length = digits.parse::<usize>()?;
            let pool = pool_letters(letters_part)?;
            Segment::new(length, pool)
        }
        // No `<length>:` prefix — a bare letter run whose target length is
        // its own length.
        Err(_) => {
            let pool = pool_letters(token)?;
            Segment::new(token.chars().count(), pool)
        }
    }
}

/// Parse a full query string into a [`Pattern`].
///
/// # Errors
///
/// Returns a `ParseError` for an empty query, a zero segment length, or a
/// non-letter character in a pool.
pub fn parse_pattern(input: &str) -> Result<Pattern, Box<ParseError>> {
    let segments = input
        .split_whitespace()
        .map(parse_segment)
        .collect::<Result<Vec<_>, _>>()?;
    Pattern::new(segments)
}
