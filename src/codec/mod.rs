use crate::error::CodecError;

pub mod foreign;
pub mod native;

/// Compression level used when the caller has no preference.
/// Matches the zstd default.
pub const DEFAULT_LEVEL: i32 = 3;

/// A codec that compresses or decompresses a whole buffer in a single call.
///
/// Every call is an independent transformation: no state is carried between
/// calls, and each call returns a freshly allocated buffer owned by the
/// caller. Implementations are safe to invoke concurrently from multiple
/// threads on independent buffers.
///
/// The `level` argument is forwarded to the engine unvalidated; what happens
/// for out-of-range levels (clamping or an error) is engine-defined.
pub trait OneShotCodec {
    /// Compresses `data` into a self-describing frame. The frame header
    /// records `data.len()`, so [`OneShotCodec::decompress`] can size its
    /// output without a full pass. Empty input is legal and produces a
    /// small header-only frame.
    fn compress(&self, data: &[u8], level: i32) -> Result<Vec<u8>, CodecError>;

    /// Decompresses a frame produced by [`OneShotCodec::compress`].
    /// Validity of the input is discovered, not assumed: bytes that do not
    /// form a frame fail with [`CodecError::InvalidFrame`], and frames
    /// without a content size in the header fail with
    /// [`CodecError::UnknownSize`].
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}
