//! # RecordReader - Sequential Field Decoding
//!
//! `RecordReader` walks a sealed record's bytes field by field, in schema
//! order: check the null indicator, then decode the value with the type the
//! schema declares for that position. Fixed widths advance the cursor by a
//! constant; text and binary widths are discovered by the codec scan.
//!
//! Text and binary fields decode into a grow-only scratch buffer owned by
//! the reader, sized to the largest field seen so far; the returned slices
//! borrow from it and stay valid until the next variable-width `get_*`.
//!
//! The reader borrows the record bytes, so it works equally over a sealed
//! [`RecordWriter`](crate::records::RecordWriter) or over bytes fetched from
//! a store.

use eyre::{bail, ensure, Result};
use smallvec::SmallVec;

use crate::encoding::{
    binary_payload_len, decode_binary, decode_bool, decode_double, decode_int, decode_long,
    decode_text, decode_timestamp, text_payload_len, TEXT_PAD_LEN,
};
use crate::records::indicator;
use crate::types::{Date, SortOrder, Timestamp};

#[derive(Debug)]
pub struct RecordReader<'a> {
    data: &'a [u8],
    pos: usize,
    scratch: SmallVec<[u8; 64]>,
}

impl<'a> RecordReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            scratch: SmallVec::new(),
        }
    }

    /// Consumes the field's indicator byte. `Ok(true)` means the field is
    /// NULL and holds no value bytes. Stored records carry exactly the
    /// null/not-null alphabet; any other byte is corruption or a direction
    /// mismatch and is rejected.
    pub fn check_null_indicator(&mut self, order: SortOrder) -> Result<bool> {
        let byte = self.take(1)?[0];
        if byte == indicator::null_byte(order) {
            Ok(true)
        } else if byte == indicator::not_null_byte(order) {
            Ok(false)
        } else {
            bail!(
                "unexpected field indicator 0x{:02X} at offset {} for {:?} field",
                byte,
                self.pos - 1,
                order
            );
        }
    }

    pub fn get_int(&mut self, order: SortOrder) -> Result<i32> {
        let bytes: [u8; 4] = self.take(4)?.try_into()?;
        Ok(decode_int(bytes, order))
    }

    pub fn get_long(&mut self, order: SortOrder) -> Result<i64> {
        let bytes: [u8; 8] = self.take(8)?.try_into()?;
        Ok(decode_long(bytes, order))
    }

    pub fn get_date(&mut self, order: SortOrder) -> Result<Date> {
        self.get_long(order)
    }

    pub fn get_timestamp(&mut self, order: SortOrder) -> Result<Timestamp> {
        let bytes: [u8; 8] = self.take(8)?.try_into()?;
        Ok(decode_timestamp(bytes, order))
    }

    pub fn get_double(&mut self, order: SortOrder) -> Result<f64> {
        let bytes: [u8; 8] = self.take(8)?.try_into()?;
        Ok(decode_double(bytes, order))
    }

    pub fn get_bool(&mut self, order: SortOrder) -> Result<bool> {
        let byte = self.take(1)?[0];
        Ok(decode_bool(byte, order))
    }

    pub fn get_text(&mut self, order: SortOrder) -> Result<&str> {
        let data = self.data;
        let rest = &data[self.pos..];
        let len = text_payload_len(rest, order)?;
        self.scratch.resize(len, 0);
        decode_text(rest, &mut self.scratch[..len], order)?;
        self.pos += len + TEXT_PAD_LEN;
        Ok(std::str::from_utf8(&self.scratch[..len])?)
    }

    pub fn get_binary(&mut self, order: SortOrder) -> Result<&[u8]> {
        let data = self.data;
        let rest = &data[self.pos..];
        let len = binary_payload_len(rest, order)?;
        self.scratch.resize(len, 0);
        let (written, consumed) = decode_binary(rest, &mut self.scratch[..len], order)?;
        self.pos += consumed;
        Ok(&self.scratch[..written])
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn set_pos(&mut self, pos: usize) -> Result<()> {
        ensure!(
            pos <= self.data.len(),
            "cursor {} out of bounds for {}-byte record",
            pos,
            self.data.len()
        );
        self.pos = pos;
        Ok(())
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        ensure!(
            self.pos + n <= self.data.len(),
            "record truncated: need {} bytes at offset {}, have {}",
            n,
            self.pos,
            self.data.len() - self.pos
        );
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
}
