use std::ffi::c_int;

use crate::codec::OneShotCodec;
use crate::error::CodecError;
use crate::ffi;

/// Binding that reaches the engine through the flat `extern "C"` surface in
/// [`crate::ffi`], exactly as a foreign host would: raw pointer + length
/// views, explicit destination capacity, and a signed byte count as the only
/// result channel.
///
/// Error diagnostics do not survive the numeric channel, so failures are
/// reported with a fixed message naming the failing entry point.
pub struct ForeignCodec;

impl OneShotCodec for ForeignCodec {
    fn compress(&self, data: &[u8], level: i32) -> Result<Vec<u8>, CodecError> {
        let bound = ffi::frameshot_compress_bound(data.len());
        let mut compressed = vec![0u8; bound];
        let written = unsafe {
            ffi::frameshot_compress(
                compressed.as_mut_ptr(),
                compressed.len(),
                data.as_ptr(),
                data.len(),
                level as c_int,
            )
        };
        if written < 0 {
            return Err(CodecError::Engine(format!(
                "frameshot_compress failed with code {written}"
            )));
        }
        compressed.truncate(written as usize);
        Ok(compressed)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let size =
            unsafe { ffi::frameshot_get_decompressed_size(data.as_ptr(), data.len()) };
        let size = match size {
            ffi::FRAMESHOT_ERR_INVALID_FRAME => return Err(CodecError::InvalidFrame),
            ffi::FRAMESHOT_ERR_UNKNOWN_SIZE => return Err(CodecError::UnknownSize),
            s if s < 0 => {
                return Err(CodecError::Engine(format!(
                    "frameshot_get_decompressed_size failed with code {s}"
                )))
            }
            s => s as usize,
        };
        let mut decompressed = vec![0u8; size];
        let written = unsafe {
            ffi::frameshot_decompress(
                decompressed.as_mut_ptr(),
                decompressed.len(),
                data.as_ptr(),
                data.len(),
            )
        };
        if written < 0 {
            return Err(CodecError::Engine(format!(
                "frameshot_decompress failed with code {written}"
            )));
        }
        decompressed.truncate(written as usize);
        Ok(decompressed)
    }
}
