//! # Order-Preserving Scalar Encoding
//!
//! Pure encode/decode functions that map typed values to byte strings whose
//! unsigned lexicographic (memcmp) order equals the logical order of the
//! values. This is what lets composite keys live in any key-ordered store
//! without type-aware comparators:
//!
//! - `scalar`: fixed-width types (int, long, timestamp, double, bool)
//! - `text`: terminated strings (no embedded terminator byte)
//! - `binary`: arbitrary bytes with zero-escaping
//!
//! All functions are stateless and reentrant. Fixed-width decoding is
//! infallible; the variable-width codecs report truncation and corruption
//! through `eyre::Result`.

pub mod binary;
pub mod scalar;
pub mod text;

pub use binary::{
    binary_payload_len, decode_binary, encode_binary, encoded_binary_len, BINARY_PAD_LEN,
};
pub use scalar::{
    decode_bool, decode_double, decode_int, decode_long, decode_timestamp, encode_bool,
    encode_double, encode_int, encode_long, encode_timestamp,
};
pub use text::{decode_text, encode_text, encoded_text_len, text_payload_len, TEXT_PAD_LEN};
