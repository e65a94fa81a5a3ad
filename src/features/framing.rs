//! Analysis-frame arithmetic
//!
//! All framed features share one layout: fixed-length windows advancing
//! by a hop, optionally centered by extending the signal with
//! `frame_length / 2` virtual zero samples on both ends. The padding is
//! never materialized; a single index mapping translates virtual
//! positions back to real sample indices.

use crate::error::{AudiokitError, Result};

/// Frame partitioning parameters, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    frame_length: usize,
    hop_length: usize,
    pad: usize,
}

impl FrameLayout {
    pub fn new(frame_length: usize, hop_length: usize, center: bool) -> Result<Self> {
        if frame_length < 2 {
            return Err(AudiokitError::invalid_argument(format!(
                "Frame length must be at least 2, got {}",
                frame_length
            )));
        }
        if hop_length < 1 {
            return Err(AudiokitError::invalid_argument(
                "Hop length must be at least 1",
            ));
        }
        let pad = if center { frame_length / 2 } else { 0 };
        Ok(Self {
            frame_length,
            hop_length,
            pad,
        })
    }

    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    pub fn hop_length(&self) -> usize {
        self.hop_length
    }

    /// Virtual zero samples on each end of the signal.
    pub fn pad(&self) -> usize {
        self.pad
    }

    /// Number of full frames over a signal of `n` samples.
    pub fn n_frames(&self, n: usize) -> usize {
        let total = n + 2 * self.pad;
        if total < self.frame_length {
            0
        } else {
            1 + (total - self.frame_length) / self.hop_length
        }
    }

    /// Virtual offset of frame `f`.
    pub fn frame_start(&self, frame: usize) -> usize {
        frame * self.hop_length
    }

    /// Map a virtual index onto the real signal of `n` samples.
    /// `None` inside the padded regions.
    pub fn real_index(&self, virtual_index: usize, n: usize) -> Option<usize> {
        let real = virtual_index.checked_sub(self.pad)?;
        if real < n {
            Some(real)
        } else {
            None
        }
    }

    /// Sample value at a virtual index; the padded regions read as zero.
    pub fn sample_at(&self, samples: &[i16], virtual_index: usize) -> i16 {
        self.real_index(virtual_index, samples.len())
            .map(|i| samples[i])
            .unwrap_or(0)
    }
}
