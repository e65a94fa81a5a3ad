//! Audiokit - WAV reader and feature extraction CLI

use clap::Parser;
use std::process;

use audiokit::diagnostics::record_error;
use audiokit::wave::{format_duration, SampleBuffer, WaveHeader};
use audiokit::{Args, Config, FeatureKind, Result};

fn main() {
    let args = Args::parse();

    audiokit::init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args_and_config(args)?;

    if !config.input_path.exists() {
        return Err(audiokit::AudiokitError::invalid_argument(format!(
            "Input file does not exist: {}",
            config.input_path.display()
        )));
    }

    println!("=== Audiokit v{} ===", audiokit::VERSION);
    println!("Input: {}", config.input_path.display());
    println!();

    let (header, buffer) = audiokit::read_wave_file(&config.input_path)?;

    println!("{}", header);
    println!();
    println!(
        "Duration        {} ({} frames)",
        format_duration(header.duration_seconds()),
        header.frame_count()
    );
    println!();

    if config.dump_frames > 0 {
        dump_frames(&header, &buffer, config.dump_frames);
        println!();
    }

    let series = compute_feature(&config, &buffer)?;

    println!(
        "=== {} (frame_length={}, hop_length={}, center={}) ===",
        config.feature.name(),
        config.frame_length(),
        config.hop_length(),
        config.center()
    );
    print_summary(&series);

    if config.verbose {
        for (i, v) in series.iter().enumerate() {
            println!("{}. {:.6}", i, v);
        }
    }

    Ok(())
}

fn compute_feature(config: &Config, buffer: &SampleBuffer) -> Result<audiokit::FrameFeatureSeries> {
    let result = match config.feature {
        FeatureKind::Zcr => audiokit::zero_crossing_rate(
            buffer.samples(),
            config.frame_length(),
            config.hop_length(),
            config.center(),
        ),
        FeatureKind::Rms => audiokit::rms(
            buffer.samples(),
            config.frame_length(),
            config.hop_length(),
            config.center(),
        ),
        FeatureKind::Envelope => audiokit::amplitude_envelope(
            buffer.samples(),
            config.frame_length(),
            config.hop_length(),
            config.center(),
        ),
    };

    if let Err(ref err) = result {
        record_error(err);
    }
    result
}

/// Print the first `n` container frames, per channel, as signed values
/// with their little-endian hex image.
fn dump_frames(header: &WaveHeader, buffer: &SampleBuffer, n: usize) {
    let frames_to_print = n.min(buffer.frames());
    let channels = header.num_channels as usize;

    println!("First {} frames:", frames_to_print);
    for f in 0..frames_to_print {
        print!("{}.", f);
        for ch in 0..channels {
            let s = buffer.samples()[f * channels + ch];
            print!(" ch{}:{}(hex=0x{:04X})", ch, s, s as u16);
        }
        println!();
    }
}

fn print_summary(series: &audiokit::FrameFeatureSeries) {
    println!("Frames: {}", series.len());
    if series.is_empty() {
        return;
    }
    let min = series.iter().copied().fold(f32::INFINITY, f32::min);
    let max = series.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mean = series.sum() / series.len() as f32;
    println!("Min: {:.6}", min);
    println!("Max: {:.6}", max);
    println!("Mean: {:.6}", mean);
}
