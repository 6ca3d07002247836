//! Error types for pattern parsing, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E006) for documentation lookup:
//!
//! - E001: `ParseFailure` (Generic parse failure)
//! - E002: `EmptyPattern` (Pattern has no segments)
//! - E003: `ZeroSegmentLength` (Segment with required length 0)
//! - E004: `InvalidLetter` (Non-letter character in a letter pool)
//! - E005: `ParseIntError` (Integer parsing error in a segment length)
//! - E006: `NomError` (Low-level nom parser error)
//!
//! # Examples
//!
//! ```
//! use rackfit::errors::ParseError;
//!
//! fn parse_something(input: &str) -> Result<(), Box<ParseError>> {
//!     if input.is_empty() {
//!         return Err(Box::new(ParseError::EmptyPattern));
//!     }
//!     Ok(())
//! }
//!
//! match parse_something("") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;
use std::num::ParseIntError;

/// Custom error type for pattern-parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Pattern parsing failed: \"{s}\"")]
    ParseFailure { s: String },

    #[error("Empty pattern (no segments)")]
    EmptyPattern,

    #[error("Segment length must be at least 1")]
    ZeroSegmentLength,

    #[error("Invalid character '{invalid_char}' (only letters allowed in a pool)")]
    InvalidLetter { invalid_char: char },

    #[error("int-parsing error: {0}")]
    ParseIntError(#[from] ParseIntError),

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl From<ParseIntError> for Box<ParseError> {
    fn from(pie: ParseIntError) -> Self {
        Box::new(ParseError::ParseIntError(pie))
    }
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        // usually just return the existing error unchanged
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::ParseFailure { .. } => "E001",
            ParseError::EmptyPattern => "E002",
            ParseError::ZeroSegmentLength => "E003",
            ParseError::InvalidLetter { .. } => "E004",
            ParseError::ParseIntError(_) => "E005",
            ParseError::NomError(_) => "E006",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyPattern => {
                Some("Example: Use 'act' or '3:acts 2:de' instead of an empty query")
            }
            ParseError::ZeroSegmentLength => {
                Some("Each segment needs a target length of at least 1 (e.g., '3:act')")
            }
            ParseError::InvalidLetter { .. } => {
                Some("Letter pools may only contain letters (a-z); digits and punctuation are not tiles")
            }
            ParseError::ParseIntError(_) => {
                Some("Expected format: <length>:<letters> (e.g., '4:beast')")
            }
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::EmptyPattern;
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `ParseError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        // Sample one of each variant
        let errors: Vec<ParseError> = vec![
            ParseError::ParseFailure { s: "test".to_string() },
            ParseError::EmptyPattern,
            ParseError::ZeroSegmentLength,
            ParseError::InvalidLetter { invalid_char: '7' },
            ParseError::NomError(ErrorKind::Alpha),
        ];

        for err in errors {
            let code = err.code();
            assert!(
                code.starts_with("E0"),
                "Error code '{}' should start with 'E0'",
                code
            );
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }

        assert!(codes.len() >= 5);
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = ParseError::InvalidLetter { invalid_char: '!' };
        let detailed = err.display_detailed();

        assert!(detailed.contains(err.code()));
        assert!(detailed.contains(&err.to_string()));
        if let Some(help) = err.help() {
            assert!(detailed.contains(help));
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let err = ParseError::EmptyPattern;
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("Empty pattern"));
    }
}
