use clock_face::core::{
    render, CanvasSize, ClockLayout, ClockSnapshot, DrawOp, FixedClock, LayoutScale, PaintStyle,
    RecordingCanvas, TimeSource,
};
use clock_face::core::renderer::render_now;

fn march_fifth(hour: u32, minute: u32) -> ClockSnapshot {
    ClockSnapshot::from_ymd_hms(2024, 3, 5, hour, minute, 0).unwrap()
}

fn paint(width: f32, height: f32, now: &ClockSnapshot) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    render(&mut canvas, CanvasSize::new(width, height), now);
    canvas
}

fn texts(canvas: &RecordingCanvas) -> Vec<String> {
    canvas.texts().map(|run| run.text.clone()).collect()
}

// ============================================================================
// Baseline geometry at the reference size
// ============================================================================

#[test]
fn test_reference_canvas_baseline() {
    let layout = ClockLayout::compute(CanvasSize::new(600.0, 300.0));

    assert_eq!(layout.scale.get(), 1.0);
    assert_eq!(layout.day.style.size, 62.0);
    assert_eq!(layout.date.style.size, 14.0);
    assert_eq!(layout.time.style.size, 15.0);
    assert_eq!(layout.rules[0].stroke.width, 1.0);
    assert_eq!(layout.rules[1].stroke.width, 1.0);
}

#[test]
fn test_reference_canvas_anchors() {
    let layout = ClockLayout::compute(CanvasSize::new(600.0, 300.0));

    assert_eq!(layout.day.anchor.to_array(), [300.0, 108.0]);
    assert_eq!(layout.date.anchor.to_array(), [300.0, 174.0]);
    assert_eq!(layout.time.anchor.to_array(), [300.0, 212.0]);
    assert_eq!(layout.day.style.letter_spacing, 14.0);
    assert_eq!(layout.date.style.letter_spacing, 5.0);
    assert_eq!(layout.time.style.letter_spacing, 4.0);
}

#[test]
fn test_text_alpha_levels() {
    let scale = LayoutScale::for_size(CanvasSize::new(600.0, 300.0));
    assert_eq!(PaintStyle::day(scale).color.a, 0.95);
    assert_eq!(PaintStyle::date(scale).color.a, 0.70);
    assert_eq!(PaintStyle::time(scale).color.a, 0.55);
}

#[test]
fn test_background_stops() {
    let canvas = paint(620.0, 320.0, &march_fifth(9, 0));
    match &canvas.ops()[0] {
        DrawOp::LinearGradient { gradient, .. } => {
            let offsets: Vec<f32> = gradient.stops.iter().map(|s| s.offset).collect();
            assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
            assert_eq!(gradient.stops[0].color.r, 0.22);
            assert_eq!(gradient.stops[2].color.b, 0.12);
            assert_eq!(gradient.end.to_array(), [620.0, 320.0]);
        }
        other => panic!("expected background gradient first, got {other:?}"),
    }
}

#[test]
fn test_vignette_darkens_edges_only() {
    let canvas = paint(600.0, 300.0, &march_fifth(9, 0));
    match &canvas.ops()[1] {
        DrawOp::RadialGradient { gradient, .. } => {
            assert_eq!(gradient.color_at(gradient.center).a, 0.0);
            let corner = gradient.color_at(glam::Vec2::new(0.0, 0.0));
            assert!(corner.a > 0.05 && corner.a < 0.35);
            assert_eq!(corner.r, 0.0);
        }
        other => panic!("expected vignette second, got {other:?}"),
    }
}

// ============================================================================
// Text content
// ============================================================================

#[test]
fn test_text_lines() {
    let canvas = paint(600.0, 300.0, &march_fifth(14, 5));
    assert_eq!(
        texts(&canvas),
        vec!["TUESDAY", "5  MARCH,  2024.", "-  2:05 PM  -"]
    );
}

#[test]
fn test_morning_time_line() {
    let canvas = paint(600.0, 300.0, &march_fifth(0, 0));
    assert_eq!(texts(&canvas)[2], "-  12:00 AM  -");
}

#[test]
fn test_two_digit_day() {
    let snap = ClockSnapshot::from_ymd_hms(1999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(snap.date_line(), "31  DECEMBER,  1999.");
    assert_eq!(snap.weekday_name(), "FRIDAY");
}

// ============================================================================
// Degenerate sizes and invariants
// ============================================================================

#[test]
fn test_zero_sizes_do_not_panic() {
    let now = march_fifth(14, 5);
    for (w, h) in [(0.0, 0.0), (0.0, 300.0), (600.0, 0.0), (-50.0, -50.0)] {
        let canvas = paint(w, h, &now);
        assert_eq!(canvas.ops().len(), 7);
        for op in canvas.ops() {
            if let DrawOp::Text { origin, size, .. } = op {
                assert!(origin.is_finite());
                assert!(size.is_finite());
            }
        }
    }
}

#[test]
fn test_scale_positive_for_many_sizes() {
    for w in [1.0, 17.0, 320.0, 620.0, 1920.0, 7680.0] {
        for h in [1.0, 9.0, 240.0, 320.0, 1080.0, 4320.0] {
            let scale = LayoutScale::for_size(CanvasSize::new(w, h));
            assert!(scale.get() > 0.0, "scale for {w}x{h}");
            let expected = (w / 600.0_f32).min(h / 300.0);
            assert!((scale.get() - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_render_is_idempotent() {
    let now = march_fifth(14, 5);
    let first = paint(833.0, 411.0, &now);
    let second = paint(833.0, 411.0, &now);
    assert_eq!(first.ops(), second.ops());
}

#[test]
fn test_resize_between_calls() {
    let now = march_fifth(14, 5);
    let small = paint(300.0, 150.0, &now);
    let large = paint(1200.0, 600.0, &now);

    let sizes = |c: &RecordingCanvas| c.texts().map(|r| r.style.size).collect::<Vec<_>>();
    assert_eq!(sizes(&small), vec![31.0, 8.0, 8.0]);
    assert_eq!(sizes(&large), vec![124.0, 28.0, 30.0]);
}

#[test]
fn test_render_now_matches_fixed_clock() {
    let clock = FixedClock(march_fifth(14, 5));
    let mut canvas = RecordingCanvas::new();
    render_now(&mut canvas, CanvasSize::new(600.0, 300.0), &clock);
    assert_eq!(canvas, paint(600.0, 300.0, &clock.now()));
}
