//! Fuzz testing for the variable-length decoders.
//!
//! Feeds arbitrary byte sequences to the text and binary scan/decode paths
//! in both directions to ensure malformed input always surfaces as an error,
//! never as a panic, a hang, or an out-of-bounds read.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ordkey::encoding::{
    binary_payload_len, decode_binary, decode_text, text_payload_len,
};
use ordkey::SortOrder;

#[derive(Debug, Arbitrary)]
struct DecoderInput {
    ascending: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: DecoderInput| {
    let order = if input.ascending {
        SortOrder::Asc
    } else {
        SortOrder::Desc
    };

    if let Ok(len) = text_payload_len(&input.data, order) {
        let mut dst = vec![0u8; len];
        let decoded = decode_text(&input.data, &mut dst, order);
        assert_eq!(decoded.unwrap(), len);
    }

    if let Ok(len) = binary_payload_len(&input.data, order) {
        let mut dst = vec![0u8; len];
        let (written, consumed) = decode_binary(&input.data, &mut dst, order).unwrap();
        assert_eq!(written, len);
        assert!(consumed <= input.data.len());
    }
});
