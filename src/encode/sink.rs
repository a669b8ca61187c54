use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::YbtResult;
use image::Rgb32FImage;

/// Configuration provided to a [`FrameSink`] at the start of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming frames in time order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> YbtResult<()>;
    /// Push one frame in strictly increasing time order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Rgb32FImage) -> YbtResult<()>;
    /// Called once after the last frame is pushed; flushes and finalizes the output.
    fn end(&mut self) -> YbtResult<()>;
    /// Release the output after a failure between `begin` and `end`.
    fn abort(&mut self) {}
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Rgb32FImage)>,
    finished: bool,
    aborted: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, Rgb32FImage)] {
        &self.frames
    }

    /// `true` once `end` has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `true` once `abort` has run.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> YbtResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        self.aborted = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Rgb32FImage) -> YbtResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> YbtResult<()> {
        self.finished = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}
