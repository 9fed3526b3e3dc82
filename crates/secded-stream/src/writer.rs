use std::io::{ErrorKind, Write};

use bytes::{BufMut, BytesMut};
use secded_code::encode_byte;

use crate::error::{Result, StreamError};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes a byte stream through the encoder into any `Write` sink.
///
/// Every byte written becomes two codewords on the wire. Handles short
/// writes internally — callers never see partial codewords.
pub struct EncodingWriter<W> {
    inner: W,
    buf: BytesMut,
    bytes_in: u64,
}

impl<W: Write> EncodingWriter<W> {
    /// Create a new encoding writer over a sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            bytes_in: 0,
        }
    }

    /// Encode and write a chunk of raw bytes (blocking).
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        self.buf.clear();
        self.buf.reserve(data.len() * 2);
        for &byte in data {
            self.buf.put_slice(&encode_byte(byte));
        }

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(StreamError::SinkClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(StreamError::Io(err)),
            }
        }

        self.bytes_in += data.len() as u64;
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(StreamError::Io(err)),
            }
        }
    }

    /// Raw bytes accepted so far (codewords written is twice this).
    pub fn bytes_in(&self) -> u64 {
        self.bytes_in
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
