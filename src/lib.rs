//! img2ybt turns still images into short looping "yellow-blue-time" animations.
//!
//! Each image is rendered twice through fixed 3x3 channel matrices: [`YB`] folds red and green
//! into a shared yellow channel, [`RG_YB`] maps red to yellow and green to blue. The animation
//! crossfades between the two with the weight `sin(pi * t / T)^4`, sampled at 30 fps for
//! `N` periods, and the frames are streamed to the system `ffmpeg` binary as an MP4.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `path -> Rgb32FImage`, raw 8-bit samples divided by 256 ([`load_image`])
//! 2. **Transform**: both matrices applied per pixel ([`Blender::from_source`])
//! 3. **Blend**: one frame per step of [`FrameTimes`] ([`Blender::frame_at`])
//! 4. **Encode**: frames pushed in order into a [`FrameSink`] ([`render_animation`])
//!
//! [`Converter`] runs the pipeline for a list of files, reporting load and write failures per
//! file without stopping the run.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod color;
mod encode;
mod foundation;
mod pipeline;

pub use animation::blend::{Blender, FrameTimes, mix_weight};
pub use assets::decode::{SAMPLE_SCALE, decode_image, load_image, normalize_rgb8};
pub use color::matrix::{ColorMatrix, MatrixPair, RG_YB, YB, transform};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path, unit_to_u8};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{AnimParams, Fps, FrameIndex};
pub use foundation::error::{YbtError, YbtResult};
pub use pipeline::convert::{
    ConvertError, ConvertReport, ConvertSettings, Converter, OUTPUT_EXTENSION, RunSummary,
    output_path_for,
};
pub use pipeline::render::render_animation;
