//! Nibble → codeword encoding. Pure and stateless.

use crate::codeword::{BIT_C1, BIT_D1, BIT_D2, BIT_D3, BIT_D4, BIT_P1, BIT_P2, BIT_P3};

/// Encode one nibble into a codeword. High four bits of `nibble` are ignored.
pub fn encode_nibble(nibble: u8) -> u8 {
    let d1 = (nibble >> 3) & 1;
    let d2 = (nibble >> 2) & 1;
    let d3 = (nibble >> 1) & 1;
    let d4 = nibble & 1;

    let p1 = d1 ^ d2 ^ d3;
    let p2 = d1 ^ d3 ^ d4;
    let p3 = d2 ^ d3 ^ d4;
    // Even parity over the other seven bits; reduces to d1 ^ d2 ^ d4.
    let c1 = d1 ^ d2 ^ d4;

    p1 << BIT_P1
        | p2 << BIT_P2
        | d1 << BIT_D1
        | p3 << BIT_P3
        | d2 << BIT_D2
        | d3 << BIT_D3
        | d4 << BIT_D4
        | c1 << BIT_C1
}

/// Encode one byte into its two codewords, high nibble first.
pub fn encode_byte(byte: u8) -> [u8; 2] {
    [encode_nibble(byte >> 4), encode_nibble(byte & 0x0F)]
}

/// Encode a byte slice. Output length is exactly `2 * input.len()`.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * 2);
    for &byte in input {
        out.extend_from_slice(&encode_byte(byte));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector_0xa5() {
        // 0xA5 = nibbles 1010 / 0101; the exact bit patterns are part of
        // the wire contract, not just "some valid Hamming code".
        assert_eq!(encode_byte(0xA5), [0x35, 0xCA]);
    }

    #[test]
    fn every_codeword_has_even_overall_parity() {
        for nibble in 0..16u8 {
            assert_eq!(encode_nibble(nibble).count_ones() % 2, 0);
        }
    }

    #[test]
    fn distinct_nibbles_yield_distinct_codewords() {
        let mut seen = [false; 256];
        for nibble in 0..16u8 {
            let cw = encode_nibble(nibble) as usize;
            assert!(!seen[cw]);
            seen[cw] = true;
        }
    }

    #[test]
    fn high_bits_of_nibble_ignored() {
        assert_eq!(encode_nibble(0xFA), encode_nibble(0x0A));
    }

    #[test]
    fn slice_encoding_doubles_length() {
        let out = encode(b"hello, secded");
        assert_eq!(out.len(), 26);
        assert_eq!(&out[..2], &encode_byte(b'h'));
    }

    #[test]
    fn empty_input_encodes_to_empty() {
        assert!(encode(&[]).is_empty());
    }
}
