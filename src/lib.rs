//! Two thin bindings over the zstd one-shot codec, built to be compared
//! side by side:
//!
//! - [`codec::native::NativeCodec`] calls the `zstd` crate's bulk API
//!   directly;
//! - [`codec::foreign::ForeignCodec`] drives the same contract through the
//!   flat `extern "C"` surface in [`ffi`], the way a foreign host would.
//!
//! Both implement [`codec::OneShotCodec`]: each call compresses or
//! decompresses a whole buffer at once and returns a freshly allocated
//! `Vec<u8>`. Frames are ordinary zstd frames, so the uncompressed length
//! is recoverable from the frame header without decompressing.
//!
//! ```
//! use frameshot::codec::{OneShotCodec, native::NativeCodec};
//!
//! let codec = NativeCodec;
//! let frame = codec.compress(b"hello hello hello", 3)?;
//! assert_eq!(codec.decompress(&frame)?, b"hello hello hello");
//! # Ok::<(), frameshot::CodecError>(())
//! ```

pub mod codec;
pub mod error;
pub mod ffi;

pub use error::CodecError;
