//! Frame sinks.
//!
//! Sinks consume blended frames in time order; see [`crate::render_animation`].

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
