// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// A cursor over the input: the data slice and the current parsing position.
///
/// The position only moves forward. Speculative scanning is done on a copy
/// obtained from [`SliceInputBuffer::lookahead`], which is then either
/// dropped or handed back to [`SliceInputBuffer::commit`].
#[derive(Debug, Clone, Copy)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

pub trait InputBuffer {
    fn is_at_end(&self) -> bool;
    fn peek_byte(&self) -> Option<u8>;
    fn consume_byte(&mut self) -> Result<u8, Error>;
}

impl InputBuffer for SliceInputBuffer<'_> {
    fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }
    fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }
    fn consume_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek_byte().ok_or(Error::ReachedEnd)?;
        self.pos = self.pos.checked_add(1).ok_or(Error::InvalidSliceBounds)?;
        Ok(byte)
    }
}

impl<'a> SliceInputBuffer<'a> {
    pub fn current_pos(&self) -> usize {
        self.pos
    }
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }

    /// Gets the length of the underlying data for bounds checking.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Advances past space, tab, newline and carriage return.
    pub fn skip_whitespace(&mut self) {
        while self.peek_byte().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consumes `expected` if it is the next byte.
    pub fn consume_if(&mut self, expected: u8) -> bool {
        self.consume_if_any(&[expected])
    }

    /// Consumes the next byte if it is one of `expected`.
    pub fn consume_if_any(&mut self, expected: &[u8]) -> bool {
        match self.peek_byte() {
            Some(byte) if expected.contains(&byte) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consumes a run of ASCII digits and returns how many were consumed.
    pub fn consume_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// True at end of input or at a whitespace byte, i.e. where a token may end.
    pub fn at_token_boundary(&self) -> bool {
        self.peek_byte().map_or(true, is_whitespace)
    }

    /// A detached copy of the cursor for speculative scanning.
    pub fn lookahead(&self) -> Self {
        *self
    }

    /// Moves the cursor to where `lookahead` stopped.
    ///
    /// The lookahead must come from this buffer and must not be behind it.
    pub fn commit(&mut self, lookahead: &Self) -> Result<(), Error> {
        if !core::ptr::eq(self.data, lookahead.data) || lookahead.pos < self.pos {
            return Err(Error::InvalidSliceBounds);
        }
        self.pos = lookahead.pos;
        Ok(())
    }
}

pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
