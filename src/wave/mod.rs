//! WAVE container support
//!
//! Header parsing, 16-bit PCM decoding, and the file-level convenience
//! entry point used by the CLI.

pub mod decode;
pub mod header;

pub use decode::{decode_pcm16, SampleBuffer};
pub use header::{format_duration, parse_header, WaveHeader};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::diagnostics::record_error;
use crate::error::{AudiokitError, Result};

/// Open `path` read-only, parse its header, and decode the full sample
/// payload. Any failure is recorded in the thread's diagnostics context
/// before it is returned.
pub fn read_wave_file<P: AsRef<Path>>(path: P) -> Result<(WaveHeader, SampleBuffer)> {
    let path = path.as_ref();
    let result = (|| {
        let file = File::open(path).map_err(|e| {
            AudiokitError::io(format!("Cannot open audio file {}: {}", path.display(), e))
        })?;
        let mut reader = BufReader::new(file);
        let header = parse_header(&mut reader)?;
        let (samples, frame_count) = decode_pcm16(&mut reader, &header)?;
        log::debug!(
            "Decoded {}: {} frames, {} channels, {} Hz",
            path.display(),
            frame_count,
            header.num_channels,
            header.sample_rate
        );
        Ok((header, samples))
    })();

    if let Err(ref err) = result {
        record_error(err);
    }
    result
}
