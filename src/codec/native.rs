use zstd::zstd_safe;

use crate::codec::OneShotCodec;
use crate::error::CodecError;

/// Binding that calls the `zstd` crate's one-shot bulk API in-process.
pub struct NativeCodec;

impl OneShotCodec for NativeCodec {
    fn compress(&self, data: &[u8], level: i32) -> Result<Vec<u8>, CodecError> {
        let mut compressed = vec![0u8; zstd_safe::compress_bound(data.len())];
        let written = zstd::bulk::compress_to_buffer(data, &mut compressed, level)
            .map_err(|e| CodecError::Engine(e.to_string()))?;
        compressed.truncate(written);
        Ok(compressed)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let size = match zstd_safe::get_frame_content_size(data) {
            Err(_) => return Err(CodecError::InvalidFrame),
            Ok(None) => return Err(CodecError::UnknownSize),
            Ok(Some(size)) => usize::try_from(size)
                .map_err(|_| CodecError::Engine(format!("frame too large: {size} bytes")))?,
        };
        let mut decompressed = vec![0u8; size];
        let written = zstd::bulk::decompress_to_buffer(data, &mut decompressed)
            .map_err(|e| CodecError::Engine(e.to_string()))?;
        decompressed.truncate(written);
        Ok(decompressed)
    }
}
