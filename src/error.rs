use thiserror::Error;

/// Error type for one-shot codec operations.
///
/// A failed call produces no usable output; nothing is retried and there are
/// no partial results.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input to `decompress` is not a recognizable compressed frame.
    #[error("not a valid compressed frame")]
    InvalidFrame,
    /// The frame is valid but carries no content size in its header.
    /// Decoding it would require streaming decompression.
    #[error("unknown decompressed size - streaming decompression not supported")]
    UnknownSize,
    /// The engine reported a failure: corruption, truncation, checksum
    /// mismatch, invalid level or insufficient destination capacity.
    #[error("engine error: {0}")]
    Engine(String),
}
