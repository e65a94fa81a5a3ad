//! Zero-crossing rate
//!
//! Framed ZCR with the convention used by common audio-analysis
//! libraries: half the mean absolute sign difference over adjacent
//! sample pairs, with optional centered (zero-padded) framing.

use ndarray::Array1;

use crate::error::Result;
use crate::features::framing::FrameLayout;
use crate::features::FrameFeatureSeries;

fn sign(x: i16) -> i32 {
    (x > 0) as i32 - (x < 0) as i32
}

/// Compute one ZCR value per analysis frame.
///
/// For frame `f` at virtual offset `f * hop_length`, sums
/// `|sign(x[k]) - sign(x[k-1])|` over the frame's adjacent pairs and
/// scales by `0.5 / (frame_length - 1)`. With `center`, the signal is
/// conceptually extended by `frame_length / 2` zeros on both ends.
/// Output values always lie in `[0, 1]`.
pub fn zero_crossing_rate(
    samples: &[i16],
    frame_length: usize,
    hop_length: usize,
    center: bool,
) -> Result<FrameFeatureSeries> {
    let layout = FrameLayout::new(frame_length, hop_length, center)?;
    let n_frames = layout.n_frames(samples.len());
    let norm = 0.5 / (frame_length - 1) as f32;

    let mut values = Vec::with_capacity(n_frames);
    for f in 0..n_frames {
        let start = layout.frame_start(f);
        let mut sum = 0u32;
        let mut prev = sign(layout.sample_at(samples, start));
        for k in 1..frame_length {
            let cur = sign(layout.sample_at(samples, start + k));
            sum += (cur - prev).unsigned_abs();
            prev = cur;
        }
        values.push(sum as f32 * norm);
    }

    Ok(Array1::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_sign_convention() {
        assert_eq!(sign(5), 1);
        assert_eq!(sign(-5), -1);
        assert_eq!(sign(0), 0);
        assert_eq!(sign(i16::MIN), -1);
        assert_eq!(sign(i16::MAX), 1);
    }

    #[test]
    fn test_silent_signal_is_zero() {
        for center in [false, true] {
            let zcr = zero_crossing_rate(&[0i16; 100], 16, 4, center).unwrap();
            assert!(!zcr.is_empty());
            assert!(zcr.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_alternating_signal_is_one() {
        let samples: Vec<i16> = (0..32).map(|i| if i % 2 == 0 { 1000 } else { -1000 }).collect();
        let zcr = zero_crossing_rate(&samples, 4, 4, false).unwrap();
        assert_eq!(zcr.len(), 8);
        assert!(zcr.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_hand_computed_frames() {
        // signs: 1, -1, 0, 1, -1
        let samples = [1i16, -1, 0, 2, -3];
        let zcr = zero_crossing_rate(&samples, 3, 2, false).unwrap();
        // frame 0: |−1−1| + |0−(−1)| = 3 -> 0.5*3/2
        // frame 1: |1−0| + |−1−1| = 3 -> 0.5*3/2
        assert_eq!(zcr.len(), 2);
        assert!((zcr[0] - 0.75).abs() < 1e-6);
        assert!((zcr[1] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_centered_padding_counts_edge_transition() {
        // Constant positive signal: the only sign changes are at the
        // virtual zero boundary of the first and last frames.
        let samples = [500i16; 8];
        let zcr = zero_crossing_rate(&samples, 4, 1, true).unwrap();
        assert_eq!(zcr.len(), 1 + (8 + 4 - 4) / 1);
        // frame 0 virtual values: 0, 0, s, s -> signs 0,0,1,1 -> sum 1
        assert!((zcr[0] - 0.5 / 3.0).abs() < 1e-6);
        // interior frames see only the constant signal
        assert_eq!(zcr[4], 0.0);
    }

    #[test]
    fn test_values_bounded_for_noise() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let samples: Vec<i16> = (0..5000).map(|_| rng.gen::<i16>()).collect();
        for center in [false, true] {
            let zcr = zero_crossing_rate(&samples, 512, 128, center).unwrap();
            assert!(zcr.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
    }

    #[test]
    fn test_deterministic() {
        let samples: Vec<i16> = (0..200).map(|i| ((i * 37) % 101 - 50) as i16).collect();
        let a = zero_crossing_rate(&samples, 32, 8, true).unwrap();
        let b = zero_crossing_rate(&samples, 32, 8, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_signal_yields_no_frames() {
        let zcr = zero_crossing_rate(&[1i16, -1, 1], 4, 1, false).unwrap();
        assert!(zcr.is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(zero_crossing_rate(&[1i16, 2], 1, 1, false).is_err());
        assert!(zero_crossing_rate(&[1i16, 2], 4, 0, false).is_err());
    }
}
