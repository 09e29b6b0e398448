use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;
use std::process::exit;
use std::time::{Duration, Instant};

use anyhow::bail;
use clap::Parser;
use human_bytes::human_bytes;
use serde::Serialize;

use frameshot::codec::foreign::ForeignCodec;
use frameshot::codec::native::NativeCodec;
use frameshot::codec::OneShotCodec;

/// Compares the native and foreign-call zstd bindings on the same input.
#[derive(Parser)]
struct Config {
    /// Input file to compress. When not given, a built-in sample text is used.
    #[arg()]
    path: Option<PathBuf>,

    /// Compression levels to compare
    #[arg(long, short = 'l', value_delimiter = ',', default_value = "1,3,5,10,19", num_args = 1..)]
    levels: Vec<i32>,

    /// Save comparison results to a CSV file
    #[arg(long, short)]
    report: Option<PathBuf>,
}

#[derive(Copy, Clone, Serialize)]
enum Binding {
    Native,
    Foreign,
}

impl Binding {
    fn codec(&self) -> Box<dyn OneShotCodec> {
        match self {
            Binding::Native => Box::new(NativeCodec),
            Binding::Foreign => Box::new(ForeignCodec),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Binding::Native => "native",
            Binding::Foreign => "foreign",
        }
    }
}

struct Measurement {
    input_len: u64,
    output_len: u64,
    elapsed: Duration,
}

impl Measurement {
    fn compression_ratio(&self) -> f64 {
        self.output_len as f64 / self.input_len as f64
    }

    fn input_throughput(&self) -> f64 {
        self.input_len as f64 / self.elapsed.as_secs_f64()
    }

    fn output_throughput(&self) -> f64 {
        self.output_len as f64 / self.elapsed.as_secs_f64()
    }
}

#[derive(Serialize)]
struct ComparisonResult {
    binding: Binding,
    level: i32,
    uncompressed_len: u64,
    compressed_len: u64,
    ratio: f64,
    compression_speed_mbps: f64,
    decompression_speed_mbps: f64,
}

impl ComparisonResult {
    fn new(
        binding: Binding,
        level: i32,
        compression: Measurement,
        decompression: Measurement,
    ) -> Self {
        Self {
            binding,
            level,
            uncompressed_len: compression.input_len,
            compressed_len: compression.output_len,
            ratio: (compression.compression_ratio() * 1000.0).round() / 1000.0,
            compression_speed_mbps: (compression.input_throughput() / 100_000.0).round() / 10.0,
            decompression_speed_mbps: (decompression.output_throughput() / 100_000.0).round()
                / 10.0,
        }
    }
}

impl Display for ComparisonResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:8} lev. {:3}:    {:8} => {:8} ({:5.1}%, {:4.2}x),    compr.: {:6.1} MB/s, decompr.: {:6.1} MB/s",
            self.binding.name(),
            self.level,
            human_bytes(self.uncompressed_len as f64),
            human_bytes(self.compressed_len as f64),
            self.ratio * 100.0,
            1.0 / self.ratio,
            self.compression_speed_mbps,
            self.decompression_speed_mbps
        )
    }
}

const SAMPLE_TEXT: &str =
    "Hello, World! This is a demo of the zstd compression library reached \
     through two thin bindings. The zstd algorithm is known for its \
     excellent compression ratio and speed. This text is repeated multiple \
     times to demonstrate compression effectiveness. ";

fn main() {
    let cfg = Config::parse();
    if let Err(e) = run(cfg) {
        eprintln!("error: {}", e);
        exit(1);
    }
}

fn run(cfg: Config) -> anyhow::Result<()> {
    let data = match &cfg.path {
        Some(path) => fs::read(path)
            .map_err(|e| anyhow::anyhow!("Could not read file {}: {}", path.display(), e))?,
        None => SAMPLE_TEXT.repeat(3).into_bytes(),
    };

    let mut results = Vec::new();
    for binding in [Binding::Native, Binding::Foreign] {
        for &level in &cfg.levels {
            let result = compare_one(binding, level, &data)?;
            println!("{}", result);
            results.push(result);
        }
    }

    if let Some(path) = cfg.report {
        let mut writer = csv::Writer::from_path(path)?;
        for result in results {
            writer.serialize(&result)?;
        }
        writer.flush()?;
    }

    Ok(())
}

fn compare_one(binding: Binding, level: i32, data: &[u8]) -> anyhow::Result<ComparisonResult> {
    let codec = binding.codec();

    let (compressed, c_elapsed) = timed(|| codec.compress(data, level))?;
    let compression = Measurement {
        input_len: data.len() as u64,
        output_len: compressed.len() as u64,
        elapsed: c_elapsed,
    };

    let (decompressed, d_elapsed) = timed(|| codec.decompress(&compressed))?;
    let decompression = Measurement {
        input_len: compressed.len() as u64,
        output_len: decompressed.len() as u64,
        elapsed: d_elapsed,
    };

    if decompressed != data {
        bail!(
            "{} binding at level {}: decompressed output does not match the input",
            binding.name(),
            level
        );
    }

    Ok(ComparisonResult::new(binding, level, compression, decompression))
}

fn timed<T, E>(op: impl FnOnce() -> Result<T, E>) -> Result<(T, Duration), E> {
    let start = Instant::now();
    let value = op()?;
    Ok((value, start.elapsed()))
}
