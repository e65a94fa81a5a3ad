//! Framed signal features
//!
//! Partitions a decoded signal into overlapping fixed-length frames and
//! computes one scalar per frame. All features share the same layout
//! and centered-padding semantics (see [`framing::FrameLayout`]).

pub mod energy;
pub mod framing;
pub mod zcr;

pub use energy::{amplitude_envelope, rms};
pub use framing::FrameLayout;
pub use zcr::zero_crossing_rate;

/// One value per analysis frame, in frame order.
pub type FrameFeatureSeries = ndarray::Array1<f32>;
