//! Fixed 3x3 channel remappings.

use image::{Rgb, Rgb32FImage};

/// A 3x3 color transform applied to a pixel as a row vector: `out[j] = sum_i in[i] * m[i][j]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix(pub [[f32; 3]; 3]);

/// Red and green collapse into their average ("yellow"); blue is untouched.
pub const YB: ColorMatrix = ColorMatrix([
    [0.5, 0.5, 0.0],
    [0.5, 0.5, 0.0],
    [0.0, 0.0, 1.0],
]);

/// Red maps mostly to yellow, green maps to blue plus some yellow, blue is discarded.
pub const RG_YB: ColorMatrix = ColorMatrix([
    [0.75, 0.75, 0.0],
    [0.25, 0.25, 1.0],
    [0.0, 0.0, 0.0],
]);

impl ColorMatrix {
    #[inline]
    pub fn apply(&self, px: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        std::array::from_fn(|j| px[0] * m[0][j] + px[1] * m[1][j] + px[2] * m[2][j])
    }

    /// `true` when every column sums to one and no coefficient is negative, which keeps
    /// outputs inside the input range.
    pub fn preserves_unit_range(&self) -> bool {
        let m = &self.0;
        m.iter().flatten().all(|&c| c >= 0.0)
            && (0..3).all(|j| ((m[0][j] + m[1][j] + m[2][j]) - 1.0).abs() <= f32::EPSILON)
    }
}

/// The two renderings an animation alternates between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixPair {
    /// Rendering shown at every integer multiple of the period.
    pub yb: ColorMatrix,
    /// Rendering reached at the half period.
    pub rg_yb: ColorMatrix,
}

impl Default for MatrixPair {
    fn default() -> Self {
        Self {
            yb: YB,
            rg_yb: RG_YB,
        }
    }
}

/// Remap every pixel of `image` through `m`. No clamping is applied.
pub fn transform(image: &Rgb32FImage, m: &ColorMatrix) -> Rgb32FImage {
    let mut out = Rgb32FImage::new(image.width(), image.height());
    for (dst, src) in out.pixels_mut().zip(image.pixels()) {
        *dst = Rgb(m.apply(src.0));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/color/matrix.rs"]
mod tests;
