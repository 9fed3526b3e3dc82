//! Extended Hamming(8,4) SECDED codec.
//!
//! Every input byte splits into two nibbles (high first); each nibble expands
//! into one 8-bit codeword carrying three Hamming parity bits and an overall
//! even-parity check bit. The decoder corrects any single flipped bit per
//! codeword and detects (but cannot correct) double-bit flips.
//!
//! Codeword bit layout, MSB first:
//!
//! ```text
//! ┌────┬────┬────┬────┬────┬────┬────┬────┐
//! │ p1 │ p2 │ d1 │ p3 │ d2 │ d3 │ d4 │ c1 │
//! └────┴────┴────┴────┴────┴────┴────┴────┘
//! ```
//!
//! - `p1..p3` — Hamming(7,4) parity over overlapping data-bit triples
//! - `d1..d4` — the protected nibble, MSB first
//! - `c1` — even parity over the other seven bits (the SECDED extension)
//!
//! No I/O here. [`encode`]/[`decode`] work on slices; [`Decoder`] is the
//! per-session form that streams one codeword at a time.

pub mod codeword;
pub mod decode;
pub mod encode;
pub mod session;

pub use codeword::{data_nibble, Syndrome};
pub use decode::{decode_codeword, Decoded, Outcome};
pub use encode::{encode, encode_byte, encode_nibble};
pub use session::{decode, decode_with_stats, DecodeStats, Decoder};
