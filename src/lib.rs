//! Audiokit - WAV Container Reader and Feature Extraction Library
//!
//! Parses the RIFF/WAVE header byte-exact, decodes 16-bit integer PCM
//! into interleaved samples, and computes framed signal features
//! (zero-crossing rate, RMS energy, amplitude envelope).

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod features;
pub mod wave;

pub use config::{Args, Config, FeatureKind};
pub use diagnostics::{last_error_code, last_error_message};
pub use error::{AudiokitError, ErrorCode, FormatKind, Result};
pub use features::{amplitude_envelope, rms, zero_crossing_rate, FrameFeatureSeries};
pub use wave::{decode_pcm16, parse_header, read_wave_file, SampleBuffer, WaveHeader};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn init_logging(verbose: bool) {
    env_logger::Builder::from_env("RUST_LOG")
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .try_init()
        .ok();
}
