use image::Rgb32FImage;

use crate::animation::blend::{Blender, FrameTimes};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{YbtError, YbtResult};

/// Blend one frame per time step and stream the frames, in order, into `sink`.
///
/// Returns the number of frames written. On any failure the sink is aborted before the error
/// is returned, so no output stream is left open.
#[tracing::instrument(skip_all, fields(frames = times.len()))]
pub fn render_animation(
    blender: &Blender,
    times: FrameTimes,
    sink: &mut dyn FrameSink,
) -> YbtResult<u64> {
    let (width, height) = blender.dimensions();
    let cfg = SinkConfig {
        width,
        height,
        fps: times.fps(),
    };

    let res = stream_frames(blender, times, cfg, sink);
    if let Err(e) = &res {
        tracing::debug!(error = %e, "aborting sink");
        sink.abort();
    }
    res
}

fn stream_frames(
    blender: &Blender,
    times: FrameTimes,
    cfg: SinkConfig,
    sink: &mut dyn FrameSink,
) -> YbtResult<u64> {
    if times.len() == 0 {
        return Err(YbtError::validation(
            "animation is shorter than one frame; increase the period or repeat count",
        ));
    }

    sink.begin(cfg)?;
    let mut frame = Rgb32FImage::new(cfg.width, cfg.height);
    let mut written = 0u64;
    for (idx, t) in times {
        blender.blend_into(&mut frame, t)?;
        sink.push_frame(idx, &frame)?;
        written += 1;
    }
    sink.end()?;

    tracing::info!(written, width = cfg.width, height = cfg.height, "animation written");
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/render.rs"]
mod tests;
