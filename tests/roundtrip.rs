use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use frameshot::codec::foreign::ForeignCodec;
use frameshot::codec::native::NativeCodec;
use frameshot::codec::{OneShotCodec, DEFAULT_LEVEL};
use frameshot::ffi::frameshot_compress_bound;
use frameshot::CodecError;

fn bindings() -> Vec<(&'static str, Box<dyn OneShotCodec>)> {
    vec![
        ("native", Box::new(NativeCodec)),
        ("foreign", Box::new(ForeignCodec)),
    ]
}

#[test]
fn round_trip_random_data() {
    let mut rng = StdRng::seed_from_u64(42);
    for (name, codec) in bindings() {
        for len in [1, 17, 1024, 65 * 1024] {
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);
            for level in [1, DEFAULT_LEVEL, 19] {
                let frame = codec.compress(&data, level).unwrap();
                let restored = codec.decompress(&frame).unwrap();
                assert_eq!(restored, data, "{name} binding, len {len}, level {level}");
            }
        }
    }
}

#[test]
fn round_trip_empty_input() {
    for (name, codec) in bindings() {
        let frame = codec.compress(&[], DEFAULT_LEVEL).unwrap();
        assert!(!frame.is_empty(), "{name}: empty input still yields a frame header");
        let restored = codec.decompress(&frame).unwrap();
        assert!(restored.is_empty(), "{name}");
    }
}

#[test]
fn repetitive_input_compresses() {
    // 1000 repetitions of "ab": 2000 bytes that must shrink at level 3.
    let data = b"ab".repeat(1000);
    for (name, codec) in bindings() {
        let frame = codec.compress(&data, DEFAULT_LEVEL).unwrap();
        assert!(frame.len() < data.len(), "{name}: {} bytes", frame.len());
        assert_eq!(codec.decompress(&frame).unwrap(), data, "{name}");
    }
}

#[test]
fn compressed_len_within_bound() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut data = vec![0u8; 10_000];
    rng.fill_bytes(&mut data);
    for (name, codec) in bindings() {
        let frame = codec.compress(&data, DEFAULT_LEVEL).unwrap();
        assert!(frame.len() <= frameshot_compress_bound(data.len()), "{name}");
    }
}

#[test]
fn compression_is_deterministic() {
    let data = b"determinism check ".repeat(100);
    for (name, codec) in bindings() {
        let a = codec.compress(&data, 5).unwrap();
        let b = codec.compress(&data, 5).unwrap();
        assert_eq!(a, b, "{name}");
    }
}

#[test]
fn bindings_are_interchangeable() {
    // Both bindings emit plain zstd frames, so either side can decode
    // frames produced by the other.
    let data = b"cross-binding payload ".repeat(64);
    let native_frame = NativeCodec.compress(&data, DEFAULT_LEVEL).unwrap();
    let foreign_frame = ForeignCodec.compress(&data, DEFAULT_LEVEL).unwrap();

    assert_eq!(ForeignCodec.decompress(&native_frame).unwrap(), data);
    assert_eq!(NativeCodec.decompress(&foreign_frame).unwrap(), data);
}

#[test]
fn random_bytes_are_not_a_frame() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut garbage = [0u8; 16];
    rng.fill_bytes(&mut garbage);
    // The zstd magic is 4 bytes; clobber the first one in the unlikely
    // event the random prefix hit it.
    garbage[0] ^= 0xFF;

    for (name, codec) in bindings() {
        match codec.decompress(&garbage) {
            Err(CodecError::InvalidFrame) => {}
            other => panic!("{name}: expected InvalidFrame, got {other:?}"),
        }
    }
}

#[test]
fn truncated_frame_is_detected() {
    let data = b"payload truncation check ".repeat(64);
    for (name, codec) in bindings() {
        let frame = codec.compress(&data, DEFAULT_LEVEL).unwrap();
        // Header stays intact, so the size query succeeds and the failure
        // comes from the decompression pass itself.
        let truncated = &frame[..frame.len() - 2];
        match codec.decompress(truncated) {
            Err(CodecError::Engine(_)) => {}
            other => panic!("{name}: expected an engine error, got {other:?}"),
        }
    }
}

#[test]
fn higher_levels_stay_sane_on_redundant_input() {
    // Not a hard invariant, but for heavily redundant input no level
    // should blow up past a small factor of level 1.
    let data = b"ab".repeat(1000);
    for (_, codec) in bindings() {
        let baseline = codec.compress(&data, 1).unwrap().len();
        for level in [3, 10, 19] {
            let len = codec.compress(&data, level).unwrap().len();
            assert!(len <= baseline * 2, "level {level}: {len} vs baseline {baseline}");
        }
    }
}

#[test]
fn negative_level_round_trips() {
    // Levels are forwarded unvalidated; zstd treats negatives as fast modes.
    let mut rng = StdRng::seed_from_u64(99);
    let data: Vec<u8> = (0..4096).map(|_| rng.gen_range(b'a'..=b'f')).collect();
    for (name, codec) in bindings() {
        let frame = codec.compress(&data, -3).unwrap();
        assert_eq!(codec.decompress(&frame).unwrap(), data, "{name}");
    }
}
