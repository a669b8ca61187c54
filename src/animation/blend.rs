use std::f64::consts::PI;

use image::{Rgb, Rgb32FImage};

use crate::color::matrix::{MatrixPair, transform};
use crate::foundation::core::{AnimParams, Fps, FrameIndex};
use crate::foundation::error::{YbtError, YbtResult};

/// Blend weight of the `RG_YB` rendering at `t` seconds: `sin(pi * t / period)^4`.
///
/// Zero at every multiple of `period`, one at the half period. The fourth power keeps the
/// animation near the `YB` rendering for most of each cycle.
#[inline]
pub fn mix_weight(t: f64, period_secs: f64) -> f64 {
    (PI * t / period_secs).sin().powi(4)
}

/// Lazy sequence of `(frame, seconds)` pairs, `k / fps` for `k` in `0..frame_count`.
///
/// Cloning yields an independent sequence starting from the clone's position.
#[derive(Clone, Debug)]
pub struct FrameTimes {
    fps: Fps,
    next: u64,
    end: u64,
}

impl FrameTimes {
    pub fn new(anim: AnimParams, fps: Fps) -> Self {
        Self::with_len(anim.frame_count(fps), fps)
    }

    pub fn with_len(frames: u64, fps: Fps) -> Self {
        Self {
            fps,
            next: 0,
            end: frames,
        }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }
}

impl Iterator for FrameTimes {
    type Item = (FrameIndex, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let k = self.next;
        self.next += 1;
        Some((FrameIndex(k), self.fps.frames_to_secs(k)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for FrameTimes {}

/// Crossfades the two remapped renderings of one image.
#[derive(Clone, Debug)]
pub struct Blender {
    yb: Rgb32FImage,
    rg_yb: Rgb32FImage,
    period_secs: f64,
}

impl Blender {
    pub fn new(yb: Rgb32FImage, rg_yb: Rgb32FImage, period_secs: f64) -> YbtResult<Self> {
        if yb.dimensions() != rg_yb.dimensions() {
            return Err(YbtError::validation(format!(
                "blend inputs differ in size: {:?} vs {:?}",
                yb.dimensions(),
                rg_yb.dimensions()
            )));
        }
        if !period_secs.is_finite() || period_secs <= 0.0 {
            return Err(YbtError::validation("blend period must be > 0"));
        }
        Ok(Self {
            yb,
            rg_yb,
            period_secs,
        })
    }

    /// Derive both renderings of a normalized `source` image.
    pub fn from_source(
        source: &Rgb32FImage,
        matrices: &MatrixPair,
        period_secs: f64,
    ) -> YbtResult<Self> {
        Self::new(
            transform(source, &matrices.yb),
            transform(source, &matrices.rg_yb),
            period_secs,
        )
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.yb.dimensions()
    }

    pub fn yb(&self) -> &Rgb32FImage {
        &self.yb
    }

    pub fn rg_yb(&self) -> &Rgb32FImage {
        &self.rg_yb
    }

    pub fn weight_at(&self, t: f64) -> f64 {
        mix_weight(t, self.period_secs)
    }

    pub fn frame_at(&self, t: f64) -> Rgb32FImage {
        let (w, h) = self.dimensions();
        let mut out = Rgb32FImage::new(w, h);
        self.mix_into(&mut out, t);
        out
    }

    /// Like [`Blender::frame_at`], reusing `dst`'s allocation.
    pub fn blend_into(&self, dst: &mut Rgb32FImage, t: f64) -> YbtResult<()> {
        if dst.dimensions() != self.dimensions() {
            return Err(YbtError::validation(format!(
                "blend target is {:?}, expected {:?}",
                dst.dimensions(),
                self.dimensions()
            )));
        }
        self.mix_into(dst, t);
        Ok(())
    }

    fn mix_into(&self, dst: &mut Rgb32FImage, t: f64) {
        let w = self.weight_at(t) as f32;
        let inv = 1.0 - w;
        for ((d, a), b) in dst
            .pixels_mut()
            .zip(self.rg_yb.pixels())
            .zip(self.yb.pixels())
        {
            *d = Rgb(std::array::from_fn(|c| w * a.0[c] + inv * b.0[c]));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/blend.rs"]
mod tests;
