//! # Terminated Text Codec
//!
//! Strings are self-delimiting: the payload travels verbatim (ascending) or
//! bit-inverted (descending), followed by a two-byte terminator that compares
//! strictly below (asc) or above (desc) any payload byte pair. Lexicographic
//! order of the encoded form therefore equals lexicographic order of the
//! payloads, and a shorter string sorts before any extension of itself.
//!
//! | Direction | Payload bytes | Terminator |
//! |-----------|---------------|------------|
//! | Asc | verbatim | `00 00` |
//! | Desc | each byte XOR `0xFF` | `FF FF` |
//!
//! The scheme works for UTF-8 and UTF-16 code units alike, with one
//! precondition: the payload must not contain the terminator byte of its
//! direction (`0x00` for asc, `0xFF` for desc). [`encode_text`] enforces this
//! and fails fast; payloads with arbitrary bytes belong to the binary codec.
//! UTF-8 text never contains `0xFF`, so descending encoding accepts every
//! Rust string without a NUL.

use eyre::{ensure, Result};

use crate::types::SortOrder;

/// Terminator width appended to every encoded string.
pub const TEXT_PAD_LEN: usize = 2;

/// Encoded width of a text payload: the payload plus the terminator pair.
pub fn encoded_text_len(payload_len: usize) -> usize {
    payload_len + TEXT_PAD_LEN
}

/// Encodes `payload` into the front of `buf` and returns the bytes written.
pub fn encode_text(payload: &[u8], buf: &mut [u8], order: SortOrder) -> Result<usize> {
    let total = encoded_text_len(payload.len());
    ensure!(
        buf.len() >= total,
        "text encode buffer too small: need {}, have {}",
        total,
        buf.len()
    );
    match order {
        SortOrder::Asc => {
            ensure!(
                !payload.contains(&0x00),
                "ascending text payload must not contain 0x00"
            );
            buf[..payload.len()].copy_from_slice(payload);
            buf[payload.len()] = 0x00;
            buf[payload.len() + 1] = 0x00;
        }
        SortOrder::Desc => {
            ensure!(
                !payload.contains(&0xFF),
                "descending text payload must not contain 0xFF"
            );
            for (dst, &src) in buf[..payload.len()].iter_mut().zip(payload) {
                *dst = src ^ 0xFF;
            }
            buf[payload.len()] = 0xFF;
            buf[payload.len() + 1] = 0xFF;
        }
    }
    Ok(total)
}

/// Scans forward for the terminator pair and returns the payload length
/// (terminator excluded). The caller advances by `len + TEXT_PAD_LEN`.
pub fn text_payload_len(buf: &[u8], order: SortOrder) -> Result<usize> {
    let term = match order {
        SortOrder::Asc => 0x00u8,
        SortOrder::Desc => 0xFF,
    };
    let mut i = 0;
    loop {
        ensure!(
            i + TEXT_PAD_LEN <= buf.len(),
            "unterminated text encoding: no terminator within {} bytes",
            buf.len()
        );
        if buf[i] == term && buf[i + 1] == term {
            return Ok(i);
        }
        i += 1;
    }
}

/// Decodes the payload into the front of `dst` and returns its length.
pub fn decode_text(buf: &[u8], dst: &mut [u8], order: SortOrder) -> Result<usize> {
    let len = text_payload_len(buf, order)?;
    ensure!(
        dst.len() >= len,
        "text decode buffer too small: need {}, have {}",
        len,
        dst.len()
    );
    match order {
        SortOrder::Asc => dst[..len].copy_from_slice(&buf[..len]),
        SortOrder::Desc => {
            for (d, &s) in dst[..len].iter_mut().zip(&buf[..len]) {
                *d = s ^ 0xFF;
            }
        }
    }
    Ok(len)
}
