// SPDX-License-Identifier: Apache-2.0

//! Number grammar validation and conversion.
//!
//! ```text
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" / digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ( "e" / "E" ) [ "+" / "-" ] 1*digit
//! ```
//!
//! The scanners below run on a lookahead copy of the cursor. The real cursor
//! is moved only after the whole token validated and converted.

use crate::json_number::parse_float;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::{InputBuffer, SliceInputBuffer};
use crate::Value;

/// Validates the number at the cursor, converts it and consumes it.
///
/// On any error the cursor is left untouched.
pub fn parse_number(buffer: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
    let start = buffer.current_pos();
    let mut scan = buffer.lookahead();

    scan_sign(&mut scan);
    scan_integer(&mut scan)?;
    scan_fraction(&mut scan)?;
    scan_exponent(&mut scan)?;

    // The matched prefix must be the whole token: "012", "1.2.3" and "1x"
    // are rejected rather than read as a shorter number
    if !scan.at_token_boundary() {
        log::trace!(
            "number: stray {:?} at {}",
            scan.peek_byte().map(char::from),
            scan.current_pos()
        );
        return Err(ParseError::InvalidValue);
    }

    let number = parse_float(buffer.slice(start, scan.current_pos())?)?;
    buffer.commit(&scan)?;
    log::trace!("number: {} from {}..{}", number, start, buffer.current_pos());
    Ok(Value::Number(number))
}

/// Optional leading minus. Never fails.
fn scan_sign(scan: &mut SliceInputBuffer<'_>) {
    scan.consume_if(b'-');
}

/// A single `0`, or a nonzero digit followed by any digits.
///
/// A digit after a leading `0` is left in place for the boundary check.
fn scan_integer(scan: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
    match scan.peek_byte() {
        Some(b'0') => {
            scan.consume_byte()?;
            Ok(())
        }
        Some(b'1'..=b'9') => {
            scan.consume_digits();
            Ok(())
        }
        _ => Err(ParseError::InvalidValue),
    }
}

/// `.` followed by at least one digit, if a `.` is present.
fn scan_fraction(scan: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
    if scan.consume_if(b'.') && scan.consume_digits() == 0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(())
}

/// `e`/`E`, optional sign, then at least one digit, if an `e`/`E` is present.
fn scan_exponent(scan: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
    if scan.consume_if_any(b"eE") {
        scan.consume_if_any(b"+-");
        if scan.consume_digits() == 0 {
            return Err(ParseError::InvalidValue);
        }
    }
    Ok(())
}
