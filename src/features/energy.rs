//! Framed energy features: RMS and amplitude envelope
//!
//! Both operate on the same frame layout as the zero-crossing rate,
//! with samples normalized to `[-1, 1]` by the i16 full-scale value.

use ndarray::Array1;

use crate::error::Result;
use crate::features::framing::FrameLayout;
use crate::features::FrameFeatureSeries;

const FULL_SCALE: f32 = 32767.0;

fn normalized(sample: i16) -> f32 {
    sample as f32 / FULL_SCALE
}

/// Root-mean-square energy per frame: `sqrt(mean(x^2))` over the
/// frame's virtual samples (padded regions read as silence).
pub fn rms(
    samples: &[i16],
    frame_length: usize,
    hop_length: usize,
    center: bool,
) -> Result<FrameFeatureSeries> {
    let layout = FrameLayout::new(frame_length, hop_length, center)?;
    let n_frames = layout.n_frames(samples.len());

    let mut values = Vec::with_capacity(n_frames);
    for f in 0..n_frames {
        let start = layout.frame_start(f);
        let sum_sq: f32 = (0..frame_length)
            .map(|k| {
                let x = normalized(layout.sample_at(samples, start + k));
                x * x
            })
            .sum();
        values.push((sum_sq / frame_length as f32).sqrt());
    }

    Ok(Array1::from(values))
}

/// Amplitude envelope per frame: the maximum absolute normalized
/// sample within each frame.
pub fn amplitude_envelope(
    samples: &[i16],
    frame_length: usize,
    hop_length: usize,
    center: bool,
) -> Result<FrameFeatureSeries> {
    let layout = FrameLayout::new(frame_length, hop_length, center)?;
    let n_frames = layout.n_frames(samples.len());

    let mut values = Vec::with_capacity(n_frames);
    for f in 0..n_frames {
        let start = layout.frame_start(f);
        let peak = (0..frame_length)
            .map(|k| normalized(layout.sample_at(samples, start + k)).abs())
            .fold(0.0f32, f32::max);
        values.push(peak);
    }

    Ok(Array1::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_signal() {
        let rms_vals = rms(&[0i16; 64], 16, 8, false).unwrap();
        assert!(rms_vals.iter().all(|&v| v == 0.0));

        let env_vals = amplitude_envelope(&[0i16; 64], 16, 8, true).unwrap();
        assert!(env_vals.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_constant_signal_rms() {
        let samples = [8192i16; 32];
        let expected = 8192.0 / FULL_SCALE;
        let vals = rms(&samples, 8, 8, false).unwrap();
        assert_eq!(vals.len(), 4);
        for &v in vals.iter() {
            assert!((v - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_alternating_signal_rms_equals_amplitude() {
        // RMS of a +-A square wave is A.
        let samples: Vec<i16> = (0..32).map(|i| if i % 2 == 0 { 1000 } else { -1000 }).collect();
        let vals = rms(&samples, 8, 8, false).unwrap();
        let expected = 1000.0 / FULL_SCALE;
        for &v in vals.iter() {
            assert!((v - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_envelope_tracks_peak() {
        let mut samples = vec![100i16; 16];
        samples[3] = -30000;
        samples[12] = 20000;
        let vals = amplitude_envelope(&samples, 8, 8, false).unwrap();
        assert_eq!(vals.len(), 2);
        assert!((vals[0] - 30000.0 / FULL_SCALE).abs() < 1e-6);
        assert!((vals[1] - 20000.0 / FULL_SCALE).abs() < 1e-6);
    }

    #[test]
    fn test_centered_edges_are_damped() {
        // The first centered frame is half virtual silence, so its RMS
        // is below an interior frame's.
        let samples = [16384i16; 64];
        let vals = rms(&samples, 16, 4, true).unwrap();
        assert!(vals[0] < vals[vals.len() / 2]);
        // The envelope still sees one real sample in the first frame.
        let env = amplitude_envelope(&samples, 16, 4, true).unwrap();
        assert!((env[0] - 16384.0 / FULL_SCALE).abs() < 1e-6);
    }

    #[test]
    fn test_bounded_by_one() {
        let samples = [i16::MAX, i16::MIN, i16::MAX, i16::MIN];
        let vals = rms(&samples, 4, 4, false).unwrap();
        // i16::MIN normalizes slightly past -1.0; allow that margin.
        assert!(vals.iter().all(|&v| v <= 1.0001));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(rms(&[1i16, 2], 1, 1, false).is_err());
        assert!(amplitude_envelope(&[1i16, 2], 2, 0, false).is_err());
    }
}
