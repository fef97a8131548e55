// SPDX-License-Identifier: Apache-2.0

//! A minimal decoder for JSON scalars.
//!
//! Accepts exactly one `null`, `true`, `false` or number, optionally
//! surrounded by whitespace. Works on borrowed slices without allocating.
//!
//! ```
//! use picoscalar::{parse, ParseError, Value};
//!
//! assert_eq!(parse(" 1.5e10 "), Ok(Value::Number(1.5e10)));
//! assert_eq!(parse("true"), Ok(Value::True));
//! assert_eq!(parse("012"), Err(ParseError::InvalidValue));
//! ```

#![cfg_attr(not(test), no_std)]

mod json_number;

mod literal;

mod number_parser;

mod parse_error;
pub use parse_error::{ParseError, ParseOutcome};

mod slice_input_buffer;

mod slice_parser;
pub use slice_parser::SliceParser;

mod value;
pub use value::{Value, ValueType};

/// Parses `input` as a single JSON scalar.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    SliceParser::new(input).parse()
}

/// Parses a byte slice as a single JSON scalar.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    SliceParser::new_from_slice(input).parse()
}

/// Parses `input` and reports the result as a value plus a status code.
///
/// The value is [`Value::Null`] whenever the outcome is not
/// [`ParseOutcome::Ok`], so nothing from a failed parse leaks out.
///
/// ```
/// use picoscalar::{parse_with_outcome, ParseOutcome, Value};
///
/// assert_eq!(parse_with_outcome("-0.5"), (Value::Number(-0.5), ParseOutcome::Ok));
/// assert_eq!(parse_with_outcome("1 2"), (Value::Null, ParseOutcome::RootNotSingular));
/// ```
pub fn parse_with_outcome(input: &str) -> (Value, ParseOutcome) {
    let result = parse(input);
    let outcome = ParseOutcome::from(&result);
    (result.unwrap_or_default(), outcome)
}
