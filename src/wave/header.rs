//! WAVE container header parsing
//!
//! Reads the canonical RIFF / fmt / data chunk sequence byte by byte,
//! validating tags against the expected constants. Numeric consistency
//! between fields (block alignment, data size) is deliberately deferred
//! to the decoder, which is the authoritative point of truth for the
//! sample payload.

use std::fmt;
use std::io::{Read, Seek, SeekFrom};

use crate::error::{AudiokitError, FormatKind, Result};

pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
pub const FMT_TAG: [u8; 4] = *b"fmt ";
pub const DATA_TAG: [u8; 4] = *b"data";

/// Size of the mandatory fmt payload for canonical PCM. Larger values
/// carry a trailing extension block that is skipped, not interpreted.
const CANONICAL_FMT_SIZE: u32 = 16;

/// Parsed, fixed-layout WAVE header descriptor.
///
/// Constructed once per file by [`parse_header`] and immutable
/// afterwards. All multi-byte fields are stored host-order after
/// little-endian decode; tags stay raw 4-byte arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveHeader {
    pub chunk_id: [u8; 4],
    pub chunk_size: u32,
    pub format: [u8; 4],

    pub subchunk1_id: [u8; 4],
    pub subchunk1_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,

    pub subchunk2_id: [u8; 4],
    pub subchunk2_size: u32,
}

impl WaveHeader {
    /// Number of container frames declared by the data subchunk.
    pub fn frame_count(&self) -> u32 {
        if self.block_align == 0 {
            return 0;
        }
        self.subchunk2_size / self.block_align as u32
    }

    /// Declared signal duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate as f64
    }
}

impl fmt::Display for WaveHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ChunkID         {}", String::from_utf8_lossy(&self.chunk_id))?;
        writeln!(f, "ChunkSize       {}", self.chunk_size)?;
        writeln!(f, "Format          {}", String::from_utf8_lossy(&self.format))?;
        writeln!(f)?;
        writeln!(f, "Subchunk1ID     {}", String::from_utf8_lossy(&self.subchunk1_id))?;
        writeln!(f, "Subchunk1Size   {}", self.subchunk1_size)?;
        writeln!(f, "AudioFormat     {}", self.audio_format)?;
        writeln!(f, "NumChannels     {}", self.num_channels)?;
        writeln!(f, "SampleRate      {}", self.sample_rate)?;
        writeln!(f, "ByteRate        {}", self.byte_rate)?;
        writeln!(f, "BlockAlign      {}", self.block_align)?;
        writeln!(f, "BitsPerSample   {}", self.bits_per_sample)?;
        writeln!(f)?;
        writeln!(f, "Subchunk2ID     {}", String::from_utf8_lossy(&self.subchunk2_id))?;
        write!(f, "Subchunk2Size   {}", self.subchunk2_size)
    }
}

/// Render seconds as `h:mm:ss.mmm`.
pub fn format_duration(raw_seconds: f64) -> String {
    // Round to whole milliseconds first so the carry propagates into
    // the seconds field instead of printing a four-digit fraction.
    let total_ms = (raw_seconds * 1000.0).round() as u64;
    let milliseconds = total_ms % 1000;
    let whole = total_ms / 1000;
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let seconds = whole % 60;
    format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
}

fn read_field<R: Read>(source: &mut R, buf: &mut [u8], field: &str) -> Result<()> {
    source.read_exact(buf).map_err(|e| {
        AudiokitError::io(format!("Failed to read {}: {}", field, e))
    })
}

fn read_tag<R: Read>(source: &mut R, field: &str) -> Result<[u8; 4]> {
    let mut buf = [0u8; 4];
    read_field(source, &mut buf, field)?;
    Ok(buf)
}

fn read_u16<R: Read>(source: &mut R, field: &str) -> Result<u16> {
    let mut buf = [0u8; 2];
    read_field(source, &mut buf, field)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32<R: Read>(source: &mut R, field: &str) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_field(source, &mut buf, field)?;
    Ok(u32::from_le_bytes(buf))
}

fn expect_tag(actual: [u8; 4], expected: [u8; 4], field: &str) -> Result<()> {
    if actual != expected {
        return Err(AudiokitError::format(
            FormatKind::BadTag,
            format!(
                "Bad {} tag: expected {:?}, found {:?}",
                field,
                String::from_utf8_lossy(&expected),
                String::from_utf8_lossy(&actual)
            ),
        ));
    }
    Ok(())
}

/// Parse the RIFF / fmt / data header from `source`.
///
/// On success the read cursor sits on the first byte of sample data;
/// on failure the cursor position is unspecified. A short read on any
/// field is an IO error, never a partial header.
pub fn parse_header<R: Read + Seek>(source: &mut R) -> Result<WaveHeader> {
    // RIFF chunk descriptor
    let chunk_id = read_tag(source, "chunk_id")?;
    expect_tag(chunk_id, RIFF_TAG, "RIFF")?;
    let chunk_size = read_u32(source, "chunk_size")?;
    let format = read_tag(source, "format")?;
    expect_tag(format, WAVE_TAG, "WAVE")?;

    // fmt subchunk
    let subchunk1_id = read_tag(source, "subchunk1_id")?;
    expect_tag(subchunk1_id, FMT_TAG, "fmt")?;
    let subchunk1_size = read_u32(source, "subchunk1_size")?;
    let audio_format = read_u16(source, "audio_format")?;
    let num_channels = read_u16(source, "num_channels")?;
    let sample_rate = read_u32(source, "sample_rate")?;
    let byte_rate = read_u32(source, "byte_rate")?;
    let block_align = read_u16(source, "block_align")?;
    let bits_per_sample = read_u16(source, "bits_per_sample")?;

    // Non-canonical fmt sizes carry an extension block: a u16 payload
    // size followed by that many bytes, discarded without interpretation.
    if subchunk1_size > CANONICAL_FMT_SIZE {
        let extra_param_size = read_u16(source, "extra_param_size")?;
        source
            .seek(SeekFrom::Current(extra_param_size as i64))
            .map_err(|e| {
                AudiokitError::io(format!("Failed to skip fmt extension: {}", e))
            })?;
        log::debug!("Skipped {} bytes of fmt extension", extra_param_size);
    }

    // data subchunk. The declared size is taken verbatim; whether the
    // source actually holds that many bytes is checked during decode.
    let subchunk2_id = read_tag(source, "subchunk2_id")?;
    expect_tag(subchunk2_id, DATA_TAG, "data")?;
    let subchunk2_size = read_u32(source, "subchunk2_size")?;

    Ok(WaveHeader {
        chunk_id,
        chunk_size,
        format,
        subchunk1_id,
        subchunk1_size,
        audio_format,
        num_channels,
        sample_rate,
        byte_rate,
        block_align,
        bits_per_sample,
        subchunk2_id,
        subchunk2_size,
    })
}
