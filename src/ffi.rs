//! Flat `extern "C"` surface over the one-shot codec.
//!
//! This is the boundary a foreign host links against (the crate builds as a
//! cdylib). Buffers cross as pointer + length with an explicit destination
//! capacity, and every fallible call reports through a single signed
//! channel: negative means failure, non-negative is a byte count.
//!
//! Textual diagnostics do not cross this boundary; callers get sentinel
//! codes only.

use std::ffi::c_int;
use std::slice;

/// Generic failure: engine error, null pointer or capacity too small.
pub const FRAMESHOT_ERR: isize = -1;
/// The source bytes are not a recognizable compressed frame.
pub const FRAMESHOT_ERR_INVALID_FRAME: isize = -1;
/// The frame carries no content size in its header.
pub const FRAMESHOT_ERR_UNKNOWN_SIZE: isize = -2;
/// The content size does not fit the signed return channel.
pub const FRAMESHOT_ERR_SIZE_OVERFLOW: isize = -3;

/// Worst-case compressed size for an input of `src_len` bytes.
#[no_mangle]
pub extern "C" fn frameshot_compress_bound(src_len: usize) -> usize {
    zstd::zstd_safe::compress_bound(src_len)
}

/// Compresses `src_len` bytes from `src` into `dst`.
///
/// Returns the number of bytes written, or negative on error. `dst` needs at
/// least [`frameshot_compress_bound`] bytes of capacity to never fail for
/// capacity reasons.
///
/// # Safety
/// - `src` must be valid for reads of `src_len` bytes
/// - `dst` must be valid for writes of `dst_capacity` bytes
#[no_mangle]
pub unsafe extern "C" fn frameshot_compress(
    dst: *mut u8,
    dst_capacity: usize,
    src: *const u8,
    src_len: usize,
    level: c_int,
) -> isize {
    if src.is_null() || dst.is_null() {
        return FRAMESHOT_ERR;
    }
    let src = slice::from_raw_parts(src, src_len);
    let dst = slice::from_raw_parts_mut(dst, dst_capacity);

    match zstd::bulk::compress_to_buffer(src, dst, level) {
        Ok(written) => written as isize,
        Err(_) => FRAMESHOT_ERR,
    }
}

/// Decompresses a frame of `src_len` bytes from `src` into `dst`.
///
/// Returns the number of bytes written, or negative on error. Size `dst`
/// from [`frameshot_get_decompressed_size`].
///
/// # Safety
/// - `src` must be valid for reads of `src_len` bytes
/// - `dst` must be valid for writes of `dst_capacity` bytes
#[no_mangle]
pub unsafe extern "C" fn frameshot_decompress(
    dst: *mut u8,
    dst_capacity: usize,
    src: *const u8,
    src_len: usize,
) -> isize {
    if src.is_null() || dst.is_null() {
        return FRAMESHOT_ERR;
    }
    let src = slice::from_raw_parts(src, src_len);
    let dst = slice::from_raw_parts_mut(dst, dst_capacity);

    match zstd::bulk::decompress_to_buffer(src, dst) {
        Ok(written) => written as isize,
        Err(_) => FRAMESHOT_ERR,
    }
}

/// Reads the uncompressed content size from a frame header without
/// decompressing.
///
/// Returns the size, or [`FRAMESHOT_ERR_INVALID_FRAME`] /
/// [`FRAMESHOT_ERR_UNKNOWN_SIZE`] / [`FRAMESHOT_ERR_SIZE_OVERFLOW`].
///
/// # Safety
/// - `src` must be valid for reads of `src_len` bytes
#[no_mangle]
pub unsafe extern "C" fn frameshot_get_decompressed_size(
    src: *const u8,
    src_len: usize,
) -> isize {
    if src.is_null() {
        return FRAMESHOT_ERR_INVALID_FRAME;
    }
    let src = slice::from_raw_parts(src, src_len);

    match header_content_size(src) {
        Ok(size) => size,
        Err(code) => code,
    }
}

fn header_content_size(src: &[u8]) -> Result<isize, isize> {
    match zstd::zstd_safe::get_frame_content_size(src) {
        Err(_) => Err(FRAMESHOT_ERR_INVALID_FRAME),
        Ok(None) => Err(FRAMESHOT_ERR_UNKNOWN_SIZE),
        Ok(Some(size)) => isize::try_from(size).map_err(|_| FRAMESHOT_ERR_SIZE_OVERFLOW),
    }
}
