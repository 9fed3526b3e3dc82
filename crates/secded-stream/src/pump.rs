//! Whole-stream pumps used by the CLI.

use std::io::{ErrorKind, Read, Write};

use secded_code::DecodeStats;

use crate::error::{Result, StreamError};
use crate::reader::DecodingReader;
use crate::writer::EncodingWriter;

const COPY_CHUNK_SIZE: usize = 8 * 1024;

/// Pump all of `src` through the encoder into `dst`.
///
/// Returns `(raw_bytes_in, codeword_bytes_out)`.
pub fn copy_encode<R: Read, W: Write>(src: &mut R, dst: W) -> Result<(u64, u64)> {
    let mut writer = EncodingWriter::new(dst);
    let mut chunk = [0u8; COPY_CHUNK_SIZE];

    loop {
        let read = match src.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(StreamError::Io(err)),
        };
        writer.write(&chunk[..read])?;
    }

    writer.flush()?;
    let bytes_in = writer.bytes_in();
    tracing::debug!(bytes_in, "encode pump complete");
    Ok((bytes_in, bytes_in * 2))
}

/// Pump all of `src` through the decoder into `dst`.
///
/// Returns the decoded byte count and the session diagnostics.
pub fn copy_decode<R: Read, W: Write>(src: R, dst: &mut W) -> Result<(u64, DecodeStats)> {
    let mut reader = DecodingReader::new(src);
    let mut chunk = [0u8; COPY_CHUNK_SIZE];
    let mut bytes_out = 0u64;

    loop {
        let n = reader.read_decoded(&mut chunk)?;
        if n == 0 {
            break;
        }
        dst.write_all(&chunk[..n]).map_err(StreamError::Io)?;
        bytes_out += n as u64;
    }

    dst.flush().map_err(StreamError::Io)?;
    let stats = *reader.stats();
    tracing::debug!(bytes_out, codewords = stats.codewords, "decode pump complete");
    Ok((bytes_out, stats))
}
