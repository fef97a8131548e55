// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::ParseError;

/// Converts an already validated number token to an `f64`.
///
/// JSON numbers are pure ASCII, so a UTF-8 failure here means the caller
/// handed over something that is not a number token.
/// Magnitudes that round to infinity are reported as `NumberTooBig`; values
/// that underflow simply round towards zero.
pub fn parse_float(bytes: &[u8]) -> Result<f64, ParseError> {
    let s = core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidValue)?;
    match f64::from_str(s) {
        Ok(val) if val.is_infinite() => Err(ParseError::NumberTooBig),
        Ok(val) => Ok(val),
        Err(_) => Err(ParseError::InvalidValue),
    }
}
