use glam::Vec2;

use super::layout::{PaintStyle, Stroke};
use crate::math::{LinearGradient, RadialGradient};

/// Axis-aligned rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        let size = self.size();
        size.x <= 0.0 || size.y <= 0.0
    }
}

/// Text plus the attributes it is laid out with
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: PaintStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: PaintStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Laid-out text ready to paint
pub trait TextBlock {
    /// Logical extents in canvas pixels
    fn size(&self) -> Vec2;
}

/// 2D painting surface the clock face renders into
pub trait Canvas {
    type Block: TextBlock;

    /// Fill `rect` with a linear gradient
    fn fill_linear(&mut self, rect: Rect, gradient: &LinearGradient);

    /// Fill `rect` with a radial gradient, composited over what is there
    fn fill_radial(&mut self, rect: Rect, gradient: &RadialGradient);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);

    /// Shape `run`; a missing font family falls back to the default sans
    fn layout_text(&mut self, run: &TextRun) -> Self::Block;

    /// Paint a laid-out block with its top-left corner at `origin`
    fn draw_text(&mut self, origin: Vec2, block: Self::Block);
}

/// Recorded paint command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill rectangle with linear gradient
    LinearGradient { rect: Rect, gradient: LinearGradient },

    /// Fill rectangle with radial gradient
    RadialGradient { rect: Rect, gradient: RadialGradient },

    /// Stroke straight segment
    Line { from: Vec2, to: Vec2, stroke: Stroke },

    /// Draw text block at top-left `origin` with measured `size`
    Text { origin: Vec2, size: Vec2, run: TextRun },
}

/// Text block produced by [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredRun {
    pub run: TextRun,
    pub size: Vec2,
}

impl TextBlock for MeasuredRun {
    fn size(&self) -> Vec2 {
        self.size
    }
}

/// Fraction of the font size each glyph advances in [`RecordingCanvas`]
const GLYPH_ADVANCE: f32 = 0.6;
/// Line height as a multiple of the font size
const LINE_HEIGHT: f32 = 1.2;

/// Canvas that records draw operations instead of painting
///
/// Text is measured with fixed-advance metrics so results are deterministic
/// without any font loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCanvas {
    operations: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Text runs in paint order
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Text { run, .. } => Some(run),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }
}

impl Canvas for RecordingCanvas {
    type Block = MeasuredRun;

    fn fill_linear(&mut self, rect: Rect, gradient: &LinearGradient) {
        self.operations.push(DrawOp::LinearGradient {
            rect,
            gradient: gradient.clone(),
        });
    }

    fn fill_radial(&mut self, rect: Rect, gradient: &RadialGradient) {
        self.operations.push(DrawOp::RadialGradient {
            rect,
            gradient: gradient.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.operations.push(DrawOp::Line { from, to, stroke });
    }

    fn layout_text(&mut self, run: &TextRun) -> MeasuredRun {
        let glyphs = run.text.chars().count() as f32;
        let size = run.style.size;
        let width = glyphs * size * GLYPH_ADVANCE + glyphs * run.style.letter_spacing;
        MeasuredRun {
            run: run.clone(),
            size: Vec2::new(width, size * LINE_HEIGHT),
        }
    }

    fn draw_text(&mut self, origin: Vec2, block: MeasuredRun) {
        self.operations.push(DrawOp::Text {
            origin,
            size: block.size,
            run: block.run,
        });
    }
}
