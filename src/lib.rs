//! # ordkey - Order-Preserving Key Encoding
//!
//! ordkey encodes typed scalar values and composite records into byte
//! strings whose unsigned lexicographic (memcmp) order equals the logical
//! order of the values. Typed tuples become opaque keys that any key-ordered
//! store (B-tree, LSM, sorted file) can hold and compare without knowing the
//! schema, which is the foundation of composite index keys.
//!
//! ## Design Goals
//!
//! 1. **Byte-comparable**: one memcmp decides any comparison, no type
//!    dispatch at compare time
//! 2. **Per-field direction**: ascending or descending, chosen field by
//!    field and folded into the bytes
//! 3. **NULL-aware**: a one-byte indicator per field makes NULL sort below
//!    every value under either direction
//! 4. **Scan boundaries**: range-scan endpoints encode with the same
//!    alphabet, bracketing all stored values
//! 5. **Zero allocation on the hot path**: callers pre-size write buffers;
//!    decode scratch is inline up to 64 bytes and grow-only beyond
//!
//! ## Layers
//!
//! - [`encoding`]: pure scalar codecs (int, long, timestamp, double, bool,
//!   text, binary) over big-endian bytes
//! - [`records`]: cursor-addressed composition of indicator-prefixed fields
//!   into comparable records
//! - [`types`]: the field type enumeration and sort direction
//!
//! ## Quick Start
//!
//! ```rust
//! use ordkey::{compare_encoded, RecordWriter, SortOrder};
//! use std::cmp::Ordering;
//!
//! fn key(id: i32, name: &str) -> eyre::Result<Vec<u8>> {
//!     let mut rec = RecordWriter::with_capacity(64);
//!     rec.put_not_null_indicator(SortOrder::Asc)?;
//!     rec.put_int(id, SortOrder::Asc)?;
//!     rec.put_not_null_indicator(SortOrder::Asc)?;
//!     rec.put_text(name, SortOrder::Asc)?;
//!     rec.mark_end();
//!     Ok(rec.as_encoded().to_vec())
//! }
//!
//! let a = key(1, "walnut")?;
//! let b = key(2, "almond")?;
//! assert_eq!(compare_encoded(&a, &b), Ordering::Less);
//! # Ok::<(), eyre::Report>(())
//! ```
//!
//! ## Contracts
//!
//! The direction is never stored: writer and reader must agree on it out of
//! band, per field, along with the schema. Encoded records carry no header
//! and no type tags; they are exactly the concatenated fields.

pub mod encoding;
pub mod records;
pub mod types;

pub use records::{compare_encoded, indicator, RecordReader, RecordWriter, INDICATOR_LEN};
pub use types::{to_hex_string, Date, FieldType, SortOrder, Timestamp};
