// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// Errors that can occur while decoding a scalar.
///
/// Parsing is all-or-nothing: the first error aborts and nothing decoded so
/// far is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A literal did not match, or a number broke the number grammar.
    InvalidValue,
    /// A valid value was followed by something other than whitespace.
    RootNotSingular,
    /// A well-formed number whose magnitude overflows an `f64`.
    NumberTooBig,
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            // A token that runs into the end of input is malformed, not missing
            slice_input_buffer::Error::ReachedEnd => ParseError::InvalidValue,
            slice_input_buffer::Error::InvalidSliceBounds => ParseError::InvalidValue,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => f.write_str("expected a value"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::RootNotSingular => f.write_str("unexpected content after value"),
            ParseError::NumberTooBig => f.write_str("number too big"),
        }
    }
}

/// Terminal state of a parse, as a single status code.
///
/// This is the flat form of `Result<Value, ParseError>` for callers that
/// want to branch on one enumeration, see [`crate::parse_with_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    Ok,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseOutcome::Ok)
    }
}

impl From<ParseError> for ParseOutcome {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::ExpectValue => ParseOutcome::ExpectValue,
            ParseError::InvalidValue => ParseOutcome::InvalidValue,
            ParseError::RootNotSingular => ParseOutcome::RootNotSingular,
            ParseError::NumberTooBig => ParseOutcome::NumberTooBig,
        }
    }
}

impl<T> From<&Result<T, ParseError>> for ParseOutcome {
    fn from(result: &Result<T, ParseError>) -> Self {
        match result {
            Ok(_) => ParseOutcome::Ok,
            Err(err) => (*err).into(),
        }
    }
}
