//! Codeword → nibble decoding with single-bit correction.

use crate::codeword::{data_nibble, Syndrome};

/// Nibble XOR mask per syndrome error position.
///
/// Positions 3, 5, 6, 7 land on data bits d1, d2, d4, d3 respectively and
/// flip the corresponding nibble bit. Positions 1, 2, 4 are errors in the
/// parity bits p1..p3: handled, but no data flip needed. Position 0 never
/// reaches the correction path (zero syndrome is the no-error case).
const CORRECTION: [u8; 8] = [
    0b0000, // 0: unreachable here
    0b0000, // 1: p1
    0b0000, // 2: p2
    0b1000, // 3: d1
    0b0000, // 4: p3
    0b0100, // 5: d2
    0b0001, // 6: d4
    0b0010, // 7: d3
];

/// How the decoder classified one codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Syndrome and check both zero.
    Clean,
    /// Single-bit error located and corrected (possibly in a parity bit,
    /// in which case the data nibble was already intact).
    Corrected { error_pos: u8 },
    /// Only the overall-parity bit was flipped; the nibble is unaffected.
    CheckBitOnly,
    /// Self-consistent nonzero syndrome with matching overall parity: a
    /// double-bit error. The nibble passes through possibly still wrong.
    UncorrectableDetected,
}

/// One decoded codeword: the (possibly corrected) nibble plus its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub nibble: u8,
    pub outcome: Outcome,
}

/// Decode a single codeword.
///
/// Never fails: any 8-bit value is a valid, if possibly erroneous,
/// codeword. Callers who don't care about the tag take `.nibble`.
pub fn decode_codeword(codeword: u8) -> Decoded {
    let syn = Syndrome::of(codeword);
    let nibble = data_nibble(codeword);

    match (syn.sum(), syn.check) {
        (0, 0) => Decoded {
            nibble,
            outcome: Outcome::Clean,
        },
        (0, _) => Decoded {
            nibble,
            outcome: Outcome::CheckBitOnly,
        },
        (_, 0) => Decoded {
            nibble,
            outcome: Outcome::UncorrectableDetected,
        },
        (_, _) => {
            let error_pos = syn.error_pos();
            Decoded {
                nibble: nibble ^ CORRECTION[error_pos as usize],
                outcome: Outcome::Corrected { error_pos },
            }
        }
    }
}
