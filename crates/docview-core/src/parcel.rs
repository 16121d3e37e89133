//! Flat little-endian parcel encoding used for saved state.
//!
//! Every value occupies a multiple of four bytes. Strings are written as an
//! `i32` count of UTF-16 code units (`-1` for null), the code units, a zero
//! terminator, and zero padding up to the next four-byte boundary.

use crate::error::{StateError, StateResult};

/// Appends values to a byte buffer.
#[derive(Debug, Default)]
pub struct ParcelWriter {
    buf: Vec<u8>,
}

impl ParcelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_string(&mut self, value: &str) {
        let units: Vec<u16> = value.encode_utf16().collect();
        self.write_i32(units.len() as i32);
        for unit in units.iter().chain(std::iter::once(&0u16)) {
            self.buf.extend_from_slice(&unit.to_le_bytes());
        }
        self.pad();
    }

    /// Write a null string marker.
    pub fn write_null_string(&mut self) {
        self.write_i32(-1);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn pad(&mut self) {
        while self.buf.len() % 4 != 0 {
            self.buf.push(0);
        }
    }
}

/// Reads values back in the order they were written.
#[derive(Debug)]
pub struct ParcelReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ParcelReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_i32(&mut self) -> StateResult<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f32(&mut self) -> StateResult<f32> {
        let bytes = self.take(4)?;
        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a string; a null marker reads as `None`.
    pub fn read_string(&mut self) -> StateResult<Option<String>> {
        let len = self.read_i32()?;
        if len == -1 {
            return Ok(None);
        }
        let count = usize::try_from(len).map_err(|_| StateError::InvalidLength(len))?;

        // code units + terminator, padded to four bytes
        let byte_len = (count + 1) * 2;
        let padded = byte_len.div_ceil(4) * 4;
        let bytes = self.take(padded)?;

        let units: Vec<u16> = bytes[..count * 2]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units)
            .map(Some)
            .map_err(|_| StateError::InvalidUtf16)
    }

    fn take(&mut self, needed: usize) -> StateResult<&'a [u8]> {
        let available = self.remaining();
        if needed > available {
            return Err(StateError::Truncated {
                offset: self.pos,
                needed,
                available,
            });
        }
        let slice = &self.data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }
}
