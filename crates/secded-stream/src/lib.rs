//! Byte-stream plumbing around the SECDED codec.
//!
//! The codec itself is pure ([`secded_code`]); this crate supplies the
//! collaborators that move raw bytes in and out of it:
//!
//! - [`EncodingWriter`] — wraps any `Write` sink, expanding each byte
//!   written into two codewords
//! - [`DecodingReader`] — wraps any `Read` source of codewords, serving
//!   corrected, reassembled bytes
//! - [`copy_encode`]/[`copy_decode`] — pump a whole stream through
//!
//! Partial reads and writes are handled internally; callers see whole
//! bytes.

pub mod error;
pub mod pump;
pub mod reader;
pub mod writer;

pub use error::{Result, StreamError};
pub use pump::{copy_decode, copy_encode};
pub use reader::DecodingReader;
pub use writer::EncodingWriter;
