use glam::Vec2;

use super::canvas::{Canvas, Rect, TextBlock, TextRun};
use super::clock::{ClockSnapshot, TimeSource};
use super::layout::{CanvasSize, ClockLayout, TextSlot};

/// Paint one frame of the clock face into `canvas`
///
/// Layers are painted back to front: background, vignette, text, rules.
/// Holds no state between calls; identical inputs give identical output.
pub fn render<C: Canvas>(canvas: &mut C, size: CanvasSize, now: &ClockSnapshot) {
    let layout = ClockLayout::compute(size);
    let full = Rect::from_size(size.width, size.height);

    canvas.fill_linear(full, &layout.background);
    canvas.fill_radial(full, &layout.vignette);

    draw_centered(canvas, &layout.day, now.weekday_name());
    draw_centered(canvas, &layout.date, now.date_line());
    draw_centered(canvas, &layout.time, now.time_line());

    for rule in &layout.rules {
        canvas.stroke_line(rule.from, rule.to, rule.stroke);
    }
}

/// Render using the current reading of `clock`
pub fn render_now<C: Canvas, T: TimeSource + ?Sized>(canvas: &mut C, size: CanvasSize, clock: &T) {
    render(canvas, size, &clock.now());
}

fn draw_centered<C: Canvas>(canvas: &mut C, slot: &TextSlot, text: String) {
    let block = canvas.layout_text(&TextRun::new(text, slot.style));
    let origin = centered_origin(slot.anchor, block.size());
    canvas.draw_text(origin, block);
}

/// Top-left corner that centers a block of `size` on `anchor`
pub fn centered_origin(anchor: Vec2, size: Vec2) -> Vec2 {
    anchor - size / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::{DrawOp, RecordingCanvas};
    use crate::core::clock::FixedClock;

    fn snapshot() -> ClockSnapshot {
        ClockSnapshot::from_ymd_hms(2024, 3, 5, 14, 5, 0).unwrap()
    }

    #[test]
    fn paints_layers_back_to_front() {
        let mut canvas = RecordingCanvas::new();
        render(&mut canvas, CanvasSize::new(600.0, 300.0), &snapshot());

        let ops = canvas.ops();
        assert_eq!(ops.len(), 7);
        assert!(matches!(ops[0], DrawOp::LinearGradient { .. }));
        assert!(matches!(ops[1], DrawOp::RadialGradient { .. }));
        assert!(matches!(ops[2], DrawOp::Text { .. }));
        assert!(matches!(ops[4], DrawOp::Text { .. }));
        assert!(matches!(ops[5], DrawOp::Line { .. }));
        assert!(matches!(ops[6], DrawOp::Line { .. }));
    }

    #[test]
    fn text_is_centered_on_anchor() {
        let mut canvas = RecordingCanvas::new();
        render(&mut canvas, CanvasSize::new(600.0, 300.0), &snapshot());

        for op in canvas.ops() {
            if let DrawOp::Text { origin, size, .. } = op {
                let mid = *origin + *size / 2.0;
                assert!((mid.x - 300.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn centered_origin_offsets_by_half() {
        let origin = centered_origin(Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0));
        assert_eq!(origin, Vec2::new(80.0, 40.0));
    }

    #[test]
    fn render_now_reads_clock() {
        let mut a = RecordingCanvas::new();
        let mut b = RecordingCanvas::new();
        let size = CanvasSize::new(620.0, 320.0);
        render_now(&mut a, size, &FixedClock(snapshot()));
        render(&mut b, size, &snapshot());
        assert_eq!(a, b);
    }
}
