// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;
use crate::slice_input_buffer::{InputBuffer, SliceInputBuffer};
use crate::Value;

/// The three keyword literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    /// Picks the literal a leading byte commits to, if any.
    pub fn from_first_byte(byte: u8) -> Option<Self> {
        match byte {
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            b'n' => Some(Literal::Null),
            _ => None,
        }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Literal::True => b"true",
            Literal::False => b"false",
            Literal::Null => b"null",
        }
    }

    pub const fn value(&self) -> Value {
        match self {
            Literal::True => Value::True,
            Literal::False => Value::False,
            Literal::Null => Value::Null,
        }
    }
}

/// Matches `literal` byte by byte at the cursor.
///
/// The cursor only moves when the whole literal matched.
pub fn parse_literal(
    buffer: &mut SliceInputBuffer<'_>,
    literal: Literal,
) -> Result<Value, ParseError> {
    let mut scan = buffer.lookahead();
    for &expected in literal.as_bytes() {
        // Running out of input mid-literal surfaces as InvalidValue
        if scan.consume_byte()? != expected {
            return Err(ParseError::InvalidValue);
        }
    }
    buffer.commit(&scan)?;
    log::trace!("literal: matched {:?}", literal);
    Ok(literal.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn parse(input: &[u8], literal: Literal) -> (Result<Value, ParseError>, usize) {
        let mut buffer = SliceInputBuffer::new(input);
        let result = parse_literal(&mut buffer, literal);
        (result, buffer.current_pos())
    }

    #[test]
    fn test_full_match() {
        assert_eq!(parse(b"true", Literal::True), (Ok(Value::True), 4));
        assert_eq!(parse(b"false", Literal::False), (Ok(Value::False), 5));
        assert_eq!(parse(b"null", Literal::Null), (Ok(Value::Null), 4));
    }

    #[test]
    fn test_match_leaves_trailing_input() {
        // Trailing content is the driver's business, not the matcher's
        assert_eq!(parse(b"truex", Literal::True), (Ok(Value::True), 4));
        assert_eq!(parse(b"null ", Literal::Null), (Ok(Value::Null), 4));
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            parse(b"True", Literal::True),
            (Err(ParseError::InvalidValue), 0)
        );
        assert_eq!(
            parse(b"fals3", Literal::False),
            (Err(ParseError::InvalidValue), 0)
        );
        assert_eq!(
            parse(b"nUll", Literal::Null),
            (Err(ParseError::InvalidValue), 0)
        );
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            parse(b"tru", Literal::True),
            (Err(ParseError::InvalidValue), 0)
        );
        assert_eq!(
            parse(b"nul", Literal::Null),
            (Err(ParseError::InvalidValue), 0)
        );
        assert_eq!(parse(b"f", Literal::False), (Err(ParseError::InvalidValue), 0));
    }

    #[test]
    fn test_from_first_byte() {
        assert_eq!(Literal::from_first_byte(b't'), Some(Literal::True));
        assert_eq!(Literal::from_first_byte(b'f'), Some(Literal::False));
        assert_eq!(Literal::from_first_byte(b'n'), Some(Literal::Null));
        assert_eq!(Literal::from_first_byte(b'T'), None);
        assert_eq!(Literal::from_first_byte(b'-'), None);
    }
}
