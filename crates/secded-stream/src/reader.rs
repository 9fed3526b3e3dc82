use std::io::{ErrorKind, Read};

use bytes::{Buf, BufMut, BytesMut};
use secded_code::{DecodeStats, Decoder};

use crate::error::{Result, StreamError};

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads decoded bytes from any `Read` source of codewords.
///
/// Each pair of source bytes yields one corrected output byte. A trailing
/// odd codeword at end of stream is dropped, never an error.
pub struct DecodingReader<R> {
    inner: R,
    decoder: Decoder,
    out: BytesMut,
    eof: bool,
}

impl<R: Read> DecodingReader<R> {
    /// Create a decoding reader with a fresh decode session.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            decoder: Decoder::new(),
            out: BytesMut::with_capacity(READ_CHUNK_SIZE),
            eof: false,
        }
    }

    /// Read decoded bytes into `buf` (blocking).
    ///
    /// Returns `Ok(0)` only at clean end of stream (or for an empty `buf`).
    pub fn read_decoded(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        while self.out.is_empty() && !self.eof {
            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(StreamError::Io(err)),
            };

            if read == 0 {
                self.eof = true;
                self.decoder.flush_trailing();
                break;
            }

            for &codeword in &chunk[..read] {
                if let Some(byte) = self.decoder.push(codeword) {
                    self.out.put_u8(byte);
                }
            }
        }

        let n = self.out.len().min(buf.len());
        buf[..n].copy_from_slice(&self.out[..n]);
        self.out.advance(n);
        Ok(n)
    }

    /// Diagnostics from the underlying decode session.
    pub fn stats(&self) -> &DecodeStats {
        self.decoder.stats()
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
