//! # RecordWriter - Record Construction
//!
//! `RecordWriter` owns a zero-filled byte buffer and appends
//! indicator-prefixed fields at a cursor. The caller sizes the buffer up
//! front with `alloc` and `grow`; encoded widths are computable before
//! writing, so the hot path never reallocates. Once every field is in place,
//! `mark_end` seals the record and `as_encoded` exposes the comparable key
//! bytes.
//!
//! ## Usage
//!
//! ```rust
//! use ordkey::{RecordWriter, SortOrder};
//!
//! let mut rec = RecordWriter::with_capacity(64);
//! rec.put_not_null_indicator(SortOrder::Asc)?;
//! rec.put_int(42, SortOrder::Asc)?;
//! rec.put_null_indicator(SortOrder::Asc)?;
//! rec.mark_end();
//! assert_eq!(rec.as_encoded(), &[0x0F, 0x80, 0x00, 0x00, 0x2A, 0x07]);
//! # Ok::<(), eyre::Report>(())
//! ```

use eyre::{ensure, eyre, Result};

use crate::encoding::{
    encode_binary, encode_bool, encode_double, encode_int, encode_long, encode_text,
    encode_timestamp, encoded_binary_len, encoded_text_len,
};
use crate::records::indicator;
use crate::records::reader::RecordReader;
use crate::types::{Date, SortOrder, Timestamp};

#[derive(Debug, Default)]
pub struct RecordWriter {
    data: Vec<u8>,
    pos: usize,
    end: usize,
}

impl RecordWriter {
    /// Creates an empty record with no buffer; call [`alloc`](Self::alloc)
    /// before writing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(sz: usize) -> Self {
        let mut rec = Self::new();
        rec.alloc(sz);
        rec
    }

    /// Replaces any existing buffer with a fresh zero-filled one and rewinds
    /// the cursor.
    pub fn alloc(&mut self, sz: usize) {
        self.data = vec![0u8; sz];
        self.pos = 0;
        self.end = 0;
    }

    /// Grows the buffer in place, preserving contents and cursor. Shrinking
    /// is a no-op. On allocation failure nothing is mutated and the error is
    /// reported to the caller.
    pub fn grow(&mut self, new_sz: usize) -> Result<()> {
        if new_sz <= self.data.len() {
            return Ok(());
        }
        let additional = new_sz - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|e| eyre!("record buffer grow to {new_sz} bytes failed: {e}"))?;
        self.data.resize(new_sz, 0);
        Ok(())
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_capacity(bytes.len())?;
        self.data[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    fn check_capacity(&self, needed: usize) -> Result<()> {
        ensure!(
            self.pos + needed <= self.data.len(),
            "record buffer overflow: need {} bytes at offset {}, buffer is {} bytes",
            needed,
            self.pos,
            self.data.len()
        );
        Ok(())
    }

    pub fn put_null_indicator(&mut self, order: SortOrder) -> Result<()> {
        self.put_bytes(&[indicator::null_byte(order)])
    }

    pub fn put_not_null_indicator(&mut self, order: SortOrder) -> Result<()> {
        self.put_bytes(&[indicator::not_null_byte(order)])
    }

    /// Open low bound of a range scan over a NULL condition. Scan keys only.
    pub fn put_null_range_start(&mut self) -> Result<()> {
        self.put_bytes(&[indicator::NULL_RANGE_START])
    }

    /// Open high bound of a range scan over a NULL condition. Scan keys only.
    pub fn put_null_range_end(&mut self) -> Result<()> {
        self.put_bytes(&[indicator::NULL_RANGE_END])
    }

    /// Not-null search condition; same byte as the stored not-null
    /// indicator for either bound of the scan.
    pub fn put_not_null_condition(&mut self, order: SortOrder) -> Result<()> {
        self.put_bytes(&[indicator::not_null_byte(order)])
    }

    /// `IS NULL` point-equality condition; same byte as the stored null
    /// indicator.
    pub fn put_null_point_condition(&mut self, order: SortOrder) -> Result<()> {
        self.put_bytes(&[indicator::null_byte(order)])
    }

    pub fn put_int(&mut self, value: i32, order: SortOrder) -> Result<()> {
        self.put_bytes(&encode_int(value, order))
    }

    pub fn put_long(&mut self, value: i64, order: SortOrder) -> Result<()> {
        self.put_bytes(&encode_long(value, order))
    }

    pub fn put_date(&mut self, value: Date, order: SortOrder) -> Result<()> {
        self.put_bytes(&encode_long(value, order))
    }

    pub fn put_timestamp(&mut self, value: Timestamp, order: SortOrder) -> Result<()> {
        self.put_bytes(&encode_timestamp(value, order))
    }

    pub fn put_double(&mut self, value: f64, order: SortOrder) -> Result<()> {
        self.put_bytes(&encode_double(value, order))
    }

    pub fn put_bool(&mut self, value: bool, order: SortOrder) -> Result<()> {
        self.put_bytes(&[encode_bool(value, order)])
    }

    pub fn put_text(&mut self, text: &str, order: SortOrder) -> Result<()> {
        self.check_capacity(encoded_text_len(text.len()))?;
        let written = encode_text(text.as_bytes(), &mut self.data[self.pos..], order)?;
        self.pos += written;
        Ok(())
    }

    pub fn put_binary(&mut self, payload: &[u8], order: SortOrder) -> Result<()> {
        self.check_capacity(encoded_binary_len(payload))?;
        let written = encode_binary(payload, &mut self.data[self.pos..], order)?;
        self.pos += written;
        Ok(())
    }

    /// Captures the cursor as the record's encoded length. Bytes past the
    /// mark are not part of the key.
    pub fn mark_end(&mut self) {
        self.end = self.pos;
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn set_pos(&mut self, pos: usize) -> Result<()> {
        ensure!(
            pos <= self.data.len(),
            "cursor {} out of bounds for {}-byte buffer",
            pos,
            self.data.len()
        );
        self.pos = pos;
        Ok(())
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn end_pos(&self) -> usize {
        self.end
    }

    /// Allocated buffer size, not the encoded length.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole buffer, including bytes past the end mark.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The sealed key bytes, up to the end mark.
    pub fn as_encoded(&self) -> &[u8] {
        &self.data[..self.end]
    }

    /// A decode cursor over the sealed bytes.
    pub fn reader(&self) -> RecordReader<'_> {
        RecordReader::new(self.as_encoded())
    }
}
