//! # Escape-and-Terminate Binary Codec
//!
//! Arbitrary byte payloads, including embedded zeros, are made
//! self-delimiting by escaping the terminator byte inside the payload:
//!
//! | Direction | Payload byte | Emitted |
//! |-----------|--------------|---------|
//! | Asc | `b != 0x00` | `b` |
//! | Asc | `0x00` | `00 FF` |
//! | Desc | `b != 0x00` | `b ^ 0xFF` |
//! | Desc | `0x00` | `FF 00` |
//!
//! followed by the terminator pair `00 00` (asc) or `FF FF` (desc). The
//! escape pair `00 FF` compares above the terminator `00 00`, so a payload
//! that continues past a zero still sorts after every prefix of itself.
//!
//! ## Decoder Dispatch
//!
//! Each step looks at the next byte (shown for asc; desc swaps `0x00` and
//! `0xFF`):
//!
//! | Next byte | Following byte | Action |
//! |-----------|----------------|--------|
//! | `!= 0x00` | any | copy |
//! | `0x00` | `0x00` | terminator, stop |
//! | `0x00` | `0xFF` | escaped zero, emit `0x00` |
//! | `0x00` | anything else | corrupt encoding, error |
//!
//! A terminator byte followed by anything other than the terminator or the
//! escape can only come from corruption or a direction mismatch; the decoder
//! reports it as an error rather than producing garbage.

use eyre::{bail, ensure, Result};

use crate::types::SortOrder;

/// Terminator width appended to every encoded payload.
pub const BINARY_PAD_LEN: usize = 2;

/// Encoded width of a binary payload: every `0x00` costs one escape byte on
/// top of the payload and terminator.
pub fn encoded_binary_len(payload: &[u8]) -> usize {
    let zeros = payload.iter().filter(|&&b| b == 0x00).count();
    payload.len() + BINARY_PAD_LEN + zeros
}

/// Encodes `payload` into the front of `buf` and returns the bytes written.
pub fn encode_binary(payload: &[u8], buf: &mut [u8], order: SortOrder) -> Result<usize> {
    let total = encoded_binary_len(payload);
    ensure!(
        buf.len() >= total,
        "binary encode buffer too small: need {}, have {}",
        total,
        buf.len()
    );
    let mut to = 0;
    match order {
        SortOrder::Asc => {
            for &b in payload {
                buf[to] = b;
                to += 1;
                if b == 0x00 {
                    buf[to] = 0xFF;
                    to += 1;
                }
            }
            buf[to] = 0x00;
            buf[to + 1] = 0x00;
        }
        SortOrder::Desc => {
            for &b in payload {
                buf[to] = b ^ 0xFF;
                to += 1;
                if b == 0x00 {
                    buf[to] = 0x00;
                    to += 1;
                }
            }
            buf[to] = 0xFF;
            buf[to + 1] = 0xFF;
        }
    }
    Ok(to + BINARY_PAD_LEN)
}

/// Walks the encoding and returns the decoded payload length. Used to size
/// the destination before [`decode_binary`].
pub fn binary_payload_len(buf: &[u8], order: SortOrder) -> Result<usize> {
    let (term, esc) = escape_pair(order);
    let mut len = 0;
    let mut i = 0;
    loop {
        ensure!(i < buf.len(), "unterminated binary encoding");
        let b = buf[i];
        if b != term {
            len += 1;
            i += 1;
            continue;
        }
        ensure!(i + 1 < buf.len(), "unterminated binary encoding");
        let next = buf[i + 1];
        if next == term {
            return Ok(len);
        } else if next == esc {
            len += 1;
            i += 2;
        } else {
            bail!(
                "corrupt binary encoding: 0x{:02X} followed by 0x{:02X} at offset {}",
                b,
                next,
                i
            );
        }
    }
}

/// Decodes the payload into the front of `dst`. Returns the payload length
/// and the number of encoded bytes consumed, terminator included.
pub fn decode_binary(buf: &[u8], dst: &mut [u8], order: SortOrder) -> Result<(usize, usize)> {
    let (term, esc) = escape_pair(order);
    let mut written = 0;
    let mut i = 0;
    loop {
        ensure!(i < buf.len(), "unterminated binary encoding");
        let b = buf[i];
        if b != term {
            ensure!(written < dst.len(), "binary decode buffer too small");
            dst[written] = match order {
                SortOrder::Asc => b,
                SortOrder::Desc => b ^ 0xFF,
            };
            written += 1;
            i += 1;
            continue;
        }
        ensure!(i + 1 < buf.len(), "unterminated binary encoding");
        let next = buf[i + 1];
        if next == term {
            return Ok((written, i + BINARY_PAD_LEN));
        } else if next == esc {
            ensure!(written < dst.len(), "binary decode buffer too small");
            dst[written] = 0x00;
            written += 1;
            i += 2;
        } else {
            bail!(
                "corrupt binary encoding: 0x{:02X} followed by 0x{:02X} at offset {}",
                b,
                next,
                i
            );
        }
    }
}

fn escape_pair(order: SortOrder) -> (u8, u8) {
    match order {
        SortOrder::Asc => (0x00, 0xFF),
        SortOrder::Desc => (0xFF, 0x00),
    }
}
