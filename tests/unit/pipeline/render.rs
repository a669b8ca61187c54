use super::*;
use crate::color::matrix::MatrixPair;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{AnimParams, Fps, FrameIndex};
use image::Rgb;

fn blender(period: f64) -> Blender {
    let src = Rgb32FImage::from_fn(4, 4, |x, y| {
        Rgb([x as f32 / 4.0, y as f32 / 4.0, 0.5])
    });
    Blender::from_source(&src, &MatrixPair::default(), period).unwrap()
}

/// Fails on the `fail_at`-th pushed frame.
#[derive(Default)]
struct FailingSink {
    fail_at: usize,
    pushed: usize,
    ended: bool,
    aborted: bool,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> YbtResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &Rgb32FImage) -> YbtResult<()> {
        if self.pushed == self.fail_at {
            return Err(YbtError::encode("disk full"));
        }
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> YbtResult<()> {
        self.ended = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

#[test]
fn renders_period_times_repeats_times_fps_frames_in_order() {
    let anim = AnimParams::new(2.0, 1).unwrap();
    let b = blender(anim.period_secs);
    let mut sink = InMemorySink::new();

    let written = render_animation(&b, FrameTimes::new(anim, Fps::ANIMATION), &mut sink).unwrap();

    assert_eq!(written, 60);
    assert!(sink.is_finished());
    assert!(!sink.is_aborted());
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 4,
            height: 4,
            fps: Fps::ANIMATION,
        })
    );
    let frames = sink.frames();
    assert_eq!(frames.len(), 60);
    for (k, (idx, frame)) in frames.iter().enumerate() {
        assert_eq!(*idx, FrameIndex(k as u64));
        assert_eq!(frame.dimensions(), (4, 4));
    }
    assert_eq!(frames[0].1.as_raw(), b.yb().as_raw());
}

#[test]
fn frames_follow_the_blend_weight() {
    let anim = AnimParams::new(1.0, 2).unwrap();
    let b = blender(anim.period_secs);
    let mut sink = InMemorySink::new();
    render_animation(&b, FrameTimes::new(anim, Fps::ANIMATION), &mut sink).unwrap();

    assert_eq!(sink.frames().len(), 60);
    // Frame 15 sits at t = 0.5 s, the half period.
    let (_, mid) = &sink.frames()[15];
    for (a, e) in mid.as_raw().iter().zip(b.rg_yb().as_raw()) {
        assert!((a - e).abs() < 1e-6);
    }
    // Frame 30 starts the second period.
    let (_, second) = &sink.frames()[30];
    for (a, e) in second.as_raw().iter().zip(b.yb().as_raw()) {
        assert!((a - e).abs() < 1e-6);
    }
}

#[test]
fn repeated_renders_are_identical() {
    let anim = AnimParams::new(0.7, 2).unwrap();
    let b = blender(anim.period_secs);
    let mut first = InMemorySink::new();
    let mut second = InMemorySink::new();
    render_animation(&b, FrameTimes::new(anim, Fps::ANIMATION), &mut first).unwrap();
    render_animation(&b, FrameTimes::new(anim, Fps::ANIMATION), &mut second).unwrap();

    assert_eq!(first.frames().len(), second.frames().len());
    for ((ia, fa), (ib, fb)) in first.frames().iter().zip(second.frames()) {
        assert_eq!(ia, ib);
        assert_eq!(fa.as_raw(), fb.as_raw());
    }
}

#[test]
fn push_failure_aborts_the_sink() {
    let anim = AnimParams::new(1.0, 1).unwrap();
    let mut sink = FailingSink {
        fail_at: 7,
        ..FailingSink::default()
    };
    let err = render_animation(&blender(1.0), FrameTimes::new(anim, Fps::ANIMATION), &mut sink)
        .unwrap_err();

    assert!(matches!(err, YbtError::Encode(_)));
    assert_eq!(sink.pushed, 7);
    assert!(!sink.ended);
    assert!(sink.aborted);
}

#[test]
fn empty_animation_is_rejected_without_opening_the_sink() {
    let mut sink = InMemorySink::new();
    let err = render_animation(&blender(1.0), FrameTimes::with_len(0, Fps::ANIMATION), &mut sink)
        .unwrap_err();
    assert!(matches!(err, YbtError::Validation(_)));
    assert!(sink.config().is_none());
}
