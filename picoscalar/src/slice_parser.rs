// SPDX-License-Identifier: Apache-2.0

use crate::literal::{parse_literal, Literal};
use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::{InputBuffer, SliceInputBuffer};
use crate::Value;

/// Driver state. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Start,
    ValueParsed(Value),
    Done(Value),
    Failed(ParseError),
}

/// Parses a single JSON scalar from a slice.
///
/// The whole input must be one value, optionally surrounded by whitespace.
// Lifetime 'a is the input buffer lifetime
pub struct SliceParser<'a> {
    buffer: SliceInputBuffer<'a>,
    state: State,
}

impl<'a> SliceParser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use picoscalar::{SliceParser, Value};
    /// let mut parser = SliceParser::new(" -1.5 ");
    /// assert_eq!(parser.parse(), Ok(Value::Number(-1.5)));
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// # Example
    /// ```
    /// # use picoscalar::{SliceParser, Value};
    /// let mut parser = SliceParser::new_from_slice(b"null");
    /// assert_eq!(parser.parse(), Ok(Value::Null));
    /// ```
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        SliceParser {
            buffer: SliceInputBuffer::new(input),
            state: State::Start,
        }
    }

    /// Runs the parse to completion.
    ///
    /// The outcome is kept: calling this again returns the same result
    /// without touching the input.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        loop {
            match self.state {
                State::Start => {
                    self.buffer.skip_whitespace();
                    self.state = match self.parse_value() {
                        Ok(value) => State::ValueParsed(value),
                        Err(err) => self.fail(err),
                    };
                }
                State::ValueParsed(value) => {
                    self.buffer.skip_whitespace();
                    self.state = if self.buffer.is_at_end() {
                        State::Done(value)
                    } else {
                        self.fail(ParseError::RootNotSingular)
                    };
                }
                State::Done(value) => return Ok(value),
                State::Failed(err) => return Err(err),
            }
        }
    }

    /// Byte offset of the cursor.
    ///
    /// After a failure this is where the failing production started.
    pub fn position(&self) -> usize {
        self.buffer.current_pos()
    }

    /// Routes on the first byte of the value.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let byte = self.buffer.peek_byte().ok_or(ParseError::ExpectValue)?;
        log::trace!(
            "SliceParser: dispatching on {:?} at {}",
            char::from(byte),
            self.buffer.current_pos()
        );
        match Literal::from_first_byte(byte) {
            Some(literal) => parse_literal(&mut self.buffer, literal),
            // Digits and '-' start a number; anything else fails its grammar
            None => parse_number(&mut self.buffer),
        }
    }

    fn fail(&self, err: ParseError) -> State {
        log::debug!(
            "SliceParser: {:?} at {} of {}",
            err,
            self.buffer.current_pos(),
            self.buffer.data_len()
        );
        State::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parse_literals() {
        assert_eq!(SliceParser::new("true").parse(), Ok(Value::True));
        assert_eq!(SliceParser::new("false").parse(), Ok(Value::False));
        assert_eq!(SliceParser::new("null").parse(), Ok(Value::Null));
    }

    #[test]
    fn parse_number_value() {
        let mut parser = SliceParser::new(" \t123\r\n");
        assert_eq!(parser.parse(), Ok(Value::Number(123.0)));
        assert_eq!(parser.position(), 7);
    }

    #[test]
    fn empty_input() {
        let mut parser = SliceParser::new("");
        assert_eq!(parser.parse(), Err(ParseError::ExpectValue));
        assert_eq!(parser.position(), 0);

        let mut parser = SliceParser::new(" \n\t\r ");
        assert_eq!(parser.parse(), Err(ParseError::ExpectValue));
        assert_eq!(parser.position(), 5);
    }

    #[test]
    fn invalid_value_keeps_position() {
        let mut parser = SliceParser::new("  nul");
        assert_eq!(parser.parse(), Err(ParseError::InvalidValue));
        assert_eq!(parser.position(), 2);

        let mut parser = SliceParser::new(" 1.");
        assert_eq!(parser.parse(), Err(ParseError::InvalidValue));
        assert_eq!(parser.position(), 1);
    }

    #[test]
    fn trailing_content() {
        let mut parser = SliceParser::new("123 abc");
        assert_eq!(parser.parse(), Err(ParseError::RootNotSingular));
        assert_eq!(parser.position(), 4);

        assert_eq!(
            SliceParser::new("truex").parse(),
            Err(ParseError::RootNotSingular)
        );
        assert_eq!(
            SliceParser::new("null null").parse(),
            Err(ParseError::RootNotSingular)
        );
    }

    #[test]
    fn unrecognized_leading_byte() {
        for input in ["x", "\"a\"", "[1]", "{}", "+1", "T"] {
            assert_eq!(
                SliceParser::new(input).parse(),
                Err(ParseError::InvalidValue),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn number_too_big() {
        let mut parser = SliceParser::new("1e400");
        assert_eq!(parser.parse(), Err(ParseError::NumberTooBig));
        assert_eq!(parser.position(), 0);
    }

    #[test]
    fn repeated_parse_returns_same_result() {
        let mut parser = SliceParser::new("1.5e10");
        assert_eq!(parser.parse(), Ok(Value::Number(1.5e10)));
        assert_eq!(parser.parse(), Ok(Value::Number(1.5e10)));

        let mut parser = SliceParser::new("tru");
        assert_eq!(parser.parse(), Err(ParseError::InvalidValue));
        assert_eq!(parser.parse(), Err(ParseError::InvalidValue));
    }

    #[test]
    fn parse_from_bytes() {
        assert_eq!(
            SliceParser::new_from_slice(b" false ").parse(),
            Ok(Value::False)
        );
        assert_eq!(
            SliceParser::new_from_slice(&[0xC3, 0xA9]).parse(),
            Err(ParseError::InvalidValue)
        );
        // NUL is an ordinary byte, not a terminator
        assert_eq!(
            SliceParser::new_from_slice(b"1\0").parse(),
            Err(ParseError::InvalidValue)
        );
    }
}
