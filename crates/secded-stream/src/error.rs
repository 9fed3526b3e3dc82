/// Errors that can occur while streaming through the codec.
///
/// The codec itself never fails: any 8-bit value is a decodable codeword.
/// Only the surrounding I/O can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// An I/O error occurred on the underlying source or sink.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink stopped accepting bytes (a write returned zero).
    #[error("sink closed (write returned zero bytes)")]
    SinkClosed,
}

pub type Result<T> = std::result::Result<T, StreamError>;
