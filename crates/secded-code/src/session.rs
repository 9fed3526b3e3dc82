//! Stateful decode sessions: nibble-pair reassembly plus diagnostics.

use crate::decode::{decode_codeword, Outcome};

/// Running diagnostics for one decode session.
///
/// Counts never change what the session emits; they are the optional
/// signal for callers who want to know what the corrector did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub codewords: u64,
    pub clean: u64,
    pub corrected: u64,
    pub check_bit_only: u64,
    pub uncorrectable: u64,
    /// The stream ended with an odd codeword count; the final pending
    /// nibble was dropped without producing a byte.
    pub trailing_dropped: bool,
}

impl DecodeStats {
    fn record(&mut self, outcome: Outcome) {
        self.codewords += 1;
        match outcome {
            Outcome::Clean => self.clean += 1,
            Outcome::Corrected { .. } => self.corrected += 1,
            Outcome::CheckBitOnly => self.check_bit_only += 1,
            Outcome::UncorrectableDetected => self.uncorrectable += 1,
        }
    }
}

/// A single decode session.
///
/// Consumes codewords one at a time, corrects single-bit errors, and
/// reassembles nibble pairs into bytes (high nibble arrives first). The
/// only state is the pending high nibble and the running stats; a session
/// must not be shared between concurrent streams.
#[derive(Debug, Default)]
pub struct Decoder {
    pending_high: Option<u8>,
    stats: DecodeStats,
}

impl Decoder {
    /// Fresh session, awaiting the first nibble of a byte.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one codeword. Returns a completed byte on every second call.
    pub fn push(&mut self, codeword: u8) -> Option<u8> {
        let decoded = decode_codeword(codeword);
        self.stats.record(decoded.outcome);

        match decoded.outcome {
            Outcome::Corrected { error_pos } => {
                tracing::trace!(codeword, error_pos, "corrected single-bit error");
            }
            Outcome::UncorrectableDetected => {
                tracing::debug!(codeword, "uncorrectable double-bit error, passing through");
            }
            _ => {}
        }

        match self.pending_high.take() {
            None => {
                self.pending_high = Some(decoded.nibble);
                None
            }
            Some(high) => Some(high << 4 | decoded.nibble),
        }
    }

    /// Whether a high nibble is pending (an odd number of codewords seen
    /// since the last completed byte).
    pub fn is_mid_byte(&self) -> bool {
        self.pending_high.is_some()
    }

    /// Drop any pending nibble at end of stream. Returns true if one was
    /// dropped. Defined boundary behavior, not an error.
    pub fn flush_trailing(&mut self) -> bool {
        let dropped = self.pending_high.take().is_some();
        if dropped {
            self.stats.trailing_dropped = true;
            tracing::debug!("codeword stream ended mid-byte; trailing nibble dropped");
        }
        dropped
    }

    /// Diagnostics accumulated so far.
    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// End the session: drop any trailing nibble and return final stats.
    pub fn finish(mut self) -> DecodeStats {
        self.flush_trailing();
        self.stats
    }

    /// Reinitialize for a new stream.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Decode a codeword slice. Output length is `input.len() / 2`, rounded
/// down: a trailing odd codeword contributes nothing.
pub fn decode(input: &[u8]) -> Vec<u8> {
    decode_with_stats(input).0
}

/// Slice decoding that also reports session diagnostics.
pub fn decode_with_stats(input: &[u8]) -> (Vec<u8>, DecodeStats) {
    let mut decoder = Decoder::new();
    let mut out = Vec::with_capacity(input.len() / 2);
    for &codeword in input {
        if let Some(byte) = decoder.push(codeword) {
            out.push(byte);
        }
    }
    (out, decoder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeword::{BIT_D1, BIT_D2, BIT_D4, BIT_P2};
    use crate::encode::{encode, encode_byte};

    #[test]
    fn roundtrip_every_byte_value() {
        for byte in 0..=255u8 {
            assert_eq!(decode(&encode(&[byte])), vec![byte]);
        }
    }

    #[test]
    fn roundtrip_multi_byte_message() {
        let message = b"the quick brown fox";
        assert_eq!(decode(&encode(message)), message);
    }

    #[test]
    fn single_bit_flip_anywhere_roundtrips() {
        for byte in [0x00, 0x5A, 0xA5, 0xFF] {
            let encoded = encode(&[byte]);
            for cw_index in 0..2 {
                for bit_pos in 0..8 {
                    let mut corrupted = encoded.clone();
                    corrupted[cw_index] ^= 1 << bit_pos;
                    assert_eq!(
                        decode(&corrupted),
                        vec![byte],
                        "byte {byte:#04x}, codeword {cw_index}, bit {bit_pos}"
                    );
                }
            }
        }
    }

    #[test]
    fn odd_length_stream_drops_trailing_nibble() {
        let mut stream = encode(&[0xA5]);
        stream.extend_from_slice(&encode_byte(0x3C)[..1]);
        assert_eq!(stream.len(), 3);

        let (out, stats) = decode_with_stats(&stream);
        assert_eq!(out, vec![0xA5]);
        assert!(stats.trailing_dropped);
        assert_eq!(stats.codewords, 3);
    }

    #[test]
    fn empty_stream_decodes_to_empty() {
        let (out, stats) = decode_with_stats(&[]);
        assert!(out.is_empty());
        assert!(!stats.trailing_dropped);
        assert_eq!(stats.codewords, 0);
    }

    #[test]
    fn stats_classify_each_codeword() {
        let mut stream = encode(&[0xA5, 0x42]);
        stream[0] ^= 1 << BIT_P2; // single parity-bit error
        stream[2] ^= (1 << BIT_D1) | (1 << BIT_D2); // double-bit blind spot

        let (out, stats) = decode_with_stats(&stream);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], 0xA5);
        assert_ne!(out[1], 0x42, "double-bit error passes through corrupted");
        assert_eq!(stats.clean, 2);
        assert_eq!(stats.corrected, 1);
        assert_eq!(stats.uncorrectable, 1);
        assert_eq!(stats.check_bit_only, 0);
    }

    #[test]
    fn session_reset_clears_pending_state() {
        let mut decoder = Decoder::new();
        assert!(decoder.push(encode_byte(0xF0)[0]).is_none());
        assert!(decoder.is_mid_byte());

        decoder.reset();
        assert!(!decoder.is_mid_byte());
        assert_eq!(decoder.stats().codewords, 0);

        let [hi, lo] = encode_byte(0x3C);
        assert!(decoder.push(hi).is_none());
        assert_eq!(decoder.push(lo), Some(0x3C));
    }

    #[test]
    fn corrected_data_bit_in_second_codeword() {
        let [hi, lo] = encode_byte(0x69);
        let mut decoder = Decoder::new();
        assert!(decoder.push(hi).is_none());
        assert_eq!(decoder.push(lo ^ (1 << BIT_D4)), Some(0x69));
        assert_eq!(decoder.stats().corrected, 1);
    }

    #[test]
    fn finish_without_pending_reports_no_drop() {
        let mut decoder = Decoder::new();
        let [hi, lo] = encode_byte(0x11);
        decoder.push(hi);
        decoder.push(lo);
        let stats = decoder.finish();
        assert!(!stats.trailing_dropped);
    }
}
