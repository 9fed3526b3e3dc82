//! Codeword bit layout and syndrome computation.

/// Bit positions within a codeword, MSB first: `p1 p2 d1 p3 d2 d3 d4 c1`.
pub const BIT_P1: u8 = 7;
pub const BIT_P2: u8 = 6;
pub const BIT_D1: u8 = 5;
pub const BIT_P3: u8 = 4;
pub const BIT_D2: u8 = 3;
pub const BIT_D3: u8 = 2;
pub const BIT_D4: u8 = 1;
pub const BIT_C1: u8 = 0;

#[inline]
pub(crate) fn bit(value: u8, pos: u8) -> u8 {
    (value >> pos) & 1
}

/// Extract the raw (uncorrected) data nibble `d1 d2 d3 d4` from a codeword.
#[inline]
pub fn data_nibble(codeword: u8) -> u8 {
    bit(codeword, BIT_D1) << 3
        | bit(codeword, BIT_D2) << 2
        | bit(codeword, BIT_D3) << 1
        | bit(codeword, BIT_D4)
}

/// The recomputed parity mismatches for one codeword.
///
/// `s1..s3` locate a single-bit error; `check` compares the stored overall
/// parity bit against the recomputed one and is what separates single-bit
/// from double-bit error patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syndrome {
    pub s1: u8,
    pub s2: u8,
    pub s3: u8,
    pub check: u8,
}

impl Syndrome {
    /// Compute the syndrome of a codeword.
    pub fn of(codeword: u8) -> Self {
        let p1 = bit(codeword, BIT_P1);
        let p2 = bit(codeword, BIT_P2);
        let d1 = bit(codeword, BIT_D1);
        let p3 = bit(codeword, BIT_P3);
        let d2 = bit(codeword, BIT_D2);
        let d3 = bit(codeword, BIT_D3);
        let d4 = bit(codeword, BIT_D4);
        let c1 = bit(codeword, BIT_C1);

        let s1 = p1 ^ d1 ^ d2 ^ d3;
        let s2 = p2 ^ d1 ^ d3 ^ d4;
        let s3 = p3 ^ d2 ^ d3 ^ d4;
        // Overall parity recomputed over p1..p3, d1..d4; s1 already carries
        // p1 ^ d1 ^ d2 ^ d3, so only p2, p3, d4 remain.
        let c2 = s1 ^ p2 ^ p3 ^ d4;

        Self {
            s1,
            s2,
            s3,
            check: c1 ^ c2,
        }
    }

    /// Integer sum of the three syndrome bits (0..=3), not a logical OR.
    #[inline]
    pub fn sum(&self) -> u8 {
        self.s1 + self.s2 + self.s3
    }

    /// The 3-bit syndrome value (0..=7) locating a single-bit error.
    #[inline]
    pub fn error_pos(&self) -> u8 {
        self.s1 | self.s2 << 1 | self.s3 << 2
    }
}
