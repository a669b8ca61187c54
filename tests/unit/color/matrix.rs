use super::*;

fn sample_image() -> Rgb32FImage {
    Rgb32FImage::from_fn(3, 2, |x, y| {
        let v = (x + 3 * y) as f32 / 8.0;
        Rgb([v, 1.0 - v, (v * 0.5) + 0.25])
    })
}

#[test]
fn yb_averages_red_green_and_keeps_blue() {
    let src = sample_image();
    let out = transform(&src, &YB);
    assert_eq!(out.dimensions(), src.dimensions());
    for (o, s) in out.pixels().zip(src.pixels()) {
        let [r, g, b] = s.0;
        let avg = (r + g) / 2.0;
        assert!((o.0[0] - avg).abs() < 1e-6);
        assert!((o.0[1] - avg).abs() < 1e-6);
        assert_eq!(o.0[2], b);
    }
}

#[test]
fn rg_yb_moves_green_into_blue() {
    assert_eq!(RG_YB.apply([1.0, 0.0, 0.0]), [0.75, 0.75, 0.0]);
    assert_eq!(RG_YB.apply([0.0, 1.0, 0.0]), [0.25, 0.25, 1.0]);
    assert_eq!(RG_YB.apply([0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
}

#[test]
fn both_fixed_matrices_preserve_unit_range() {
    assert!(YB.preserves_unit_range());
    assert!(RG_YB.preserves_unit_range());

    let amplify = ColorMatrix([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert!(!amplify.preserves_unit_range());
}

#[test]
fn transform_does_not_clamp() {
    let amplify = ColorMatrix([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let src = Rgb32FImage::from_pixel(1, 1, Rgb([0.75, 0.0, 0.0]));
    assert_eq!(transform(&src, &amplify).get_pixel(0, 0).0, [1.5, 0.0, 0.0]);
}

#[test]
fn default_pair_uses_fixed_matrices() {
    let pair = MatrixPair::default();
    assert_eq!(pair.yb, YB);
    assert_eq!(pair.rg_yb, RG_YB);
}
