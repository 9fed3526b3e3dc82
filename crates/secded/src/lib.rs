//! Extended Hamming(8,4) SECDED byte-stream codec.
//!
//! Each input byte expands into two 8-bit codewords (one per nibble); the
//! decoder corrects any single flipped bit per codeword, detects double-bit
//! flips, and reassembles the original bytes.
//!
//! # Crate Structure
//!
//! - [`code`] — the pure codec: encode, syndrome decode, decode sessions
//! - [`stream`] — `Read`/`Write` adapters and whole-stream pumps
//!
//! The `secded` binary in this package fronts both with encode/decode/
//! inspect subcommands.

/// Re-export codec types.
pub mod code {
    pub use secded_code::*;
}

/// Re-export stream adapter types.
pub mod stream {
    pub use secded_stream::*;
}
