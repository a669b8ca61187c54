use crate::foundation::error::{YbtError, YbtResult};

/// Slack applied before rounding a seconds-to-frames conversion, so products such as
/// `0.1 * 3 * 30` count as the integer they denote.
const FRAME_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    /// Output rate for every animation this crate writes.
    pub const ANIMATION: Fps = Fps { num: 30, den: 1 };

    pub fn new(num: u32, den: u32) -> YbtResult<Self> {
        if den == 0 {
            return Err(YbtError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(YbtError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of frame start times `k / fps` strictly below `secs`.
    pub fn frames_before_secs(self, secs: f64) -> u64 {
        (secs * self.as_f64() - FRAME_EPSILON).ceil().max(0.0) as u64
    }
}

/// Period and repeat count of one animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimParams {
    /// Seconds for one full oscillation of the blend weight.
    pub period_secs: f64,
    /// Number of periods to render.
    pub repeats: u32,
}

impl AnimParams {
    pub fn new(period_secs: f64, repeats: u32) -> YbtResult<Self> {
        if !period_secs.is_finite() || period_secs <= 0.0 {
            return Err(YbtError::validation(format!(
                "period must be a finite number of seconds > 0 (got {period_secs})"
            )));
        }
        if repeats == 0 {
            return Err(YbtError::validation("repeat count must be > 0"));
        }
        Ok(Self {
            period_secs,
            repeats,
        })
    }

    pub fn duration_secs(self) -> f64 {
        self.period_secs * f64::from(self.repeats)
    }

    pub fn frame_count(self, fps: Fps) -> u64 {
        fps.frames_before_secs(self.duration_secs())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
