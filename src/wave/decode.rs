//! 16-bit PCM sample decoding
//!
//! Converts the raw little-endian sample payload into interleaved
//! signed 16-bit samples. Reads proceed in bounded chunks so transient
//! memory stays O(chunk size) regardless of file size; the decode is
//! all-or-nothing and never returns a partially filled buffer.

use std::io::Read;

use crate::error::{AudiokitError, FormatKind, Result};
use crate::wave::header::WaveHeader;

/// Target read chunk, rounded down to a whole number of container
/// frames before use (never below one frame).
const TARGET_CHUNK_BYTES: usize = 64 * 1024;

/// Decoded interleaved samples, one `i16` per channel per frame
/// (`frame0_ch0, frame0_ch1, ..., frame1_ch0, ...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    num_channels: u16,
}

impl SampleBuffer {
    /// Total sample count across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    /// Number of container frames (time slices across all channels).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.num_channels as usize
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Samples of one channel in frame order.
    pub fn channel(&self, channel: u16) -> impl Iterator<Item = i16> + '_ {
        self.samples
            .iter()
            .skip(channel as usize)
            .step_by(self.num_channels as usize)
            .copied()
    }
}

/// Decode the full data payload of a 16-bit integer PCM file.
///
/// `source` must be positioned on the first sample byte, where
/// [`parse_header`](crate::wave::parse_header) leaves it. Returns the
/// sample buffer together with the container frame count
/// (`subchunk2_size / block_align`).
pub fn decode_pcm16<R: Read>(source: &mut R, header: &WaveHeader) -> Result<(SampleBuffer, u32)> {
    if header.audio_format != 1 {
        return Err(AudiokitError::format(
            FormatKind::UnsupportedFormat,
            format!("Audio format {} is not integer PCM", header.audio_format),
        ));
    }
    if header.bits_per_sample != 16 {
        return Err(AudiokitError::format(
            FormatKind::UnsupportedBitDepth,
            format!("Unsupported bit depth: {}", header.bits_per_sample),
        ));
    }
    if header.num_channels == 0 {
        return Err(AudiokitError::format(
            FormatKind::InconsistentLayout,
            "Channel count must be at least 1",
        ));
    }
    if header.block_align as usize != header.num_channels as usize * 2 {
        return Err(AudiokitError::format(
            FormatKind::InconsistentLayout,
            format!(
                "Block align {} does not match {} channels of 2 bytes",
                header.block_align, header.num_channels
            ),
        ));
    }
    if header.subchunk2_size == 0 {
        return Err(AudiokitError::format(
            FormatKind::EmptyData,
            "Data subchunk declares zero bytes",
        ));
    }
    if header.subchunk2_size % header.block_align as u32 != 0 {
        return Err(AudiokitError::format(
            FormatKind::MisalignedData,
            format!(
                "Data size {} is not a multiple of block align {}",
                header.subchunk2_size, header.block_align
            ),
        ));
    }

    let block_align = header.block_align as usize;
    let frame_count = header.subchunk2_size / header.block_align as u32;
    let total_samples = frame_count as usize * header.num_channels as usize;

    let mut samples: Vec<i16> = Vec::new();
    samples.try_reserve_exact(total_samples).map_err(|e| {
        AudiokitError::out_of_memory(format!(
            "Cannot allocate {} samples: {}",
            total_samples, e
        ))
    })?;

    let frames_per_chunk = (TARGET_CHUNK_BYTES / block_align).max(1);
    let chunk_capacity = frames_per_chunk * block_align;
    let mut chunk = vec![0u8; chunk_capacity];

    let mut remaining = header.subchunk2_size as usize;
    while remaining > 0 {
        let take = remaining.min(chunk_capacity);
        source.read_exact(&mut chunk[..take]).map_err(|e| {
            AudiokitError::io(format!(
                "Short read in sample data with {} bytes left: {}",
                remaining, e
            ))
        })?;
        for pair in chunk[..take].chunks_exact(2) {
            samples.push(i16::from_le_bytes([pair[0], pair[1]]));
        }
        remaining -= take;
    }

    if samples.len() != total_samples {
        return Err(AudiokitError::internal(format!(
            "Decoded {} samples, expected {}",
            samples.len(),
            total_samples
        )));
    }

    log::debug!(
        "Decoded {} frames x {} channels ({} bytes)",
        frame_count,
        header.num_channels,
        header.subchunk2_size
    );

    Ok((
        SampleBuffer {
            samples,
            num_channels: header.num_channels,
        },
        frame_count,
    ))
}
