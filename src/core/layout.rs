use glam::Vec2;

use crate::math::{Color, ColorStop, LinearGradient, RadialGradient};

/// Canvas the layout is designed against; everything scales relative to it
pub const REFERENCE_WIDTH: f32 = 600.0;
pub const REFERENCE_HEIGHT: f32 = 300.0;

/// Display font for the weekday line
pub const DISPLAY_FAMILY: &str = "Anurati";
/// Body font for the date and time lines
pub const BODY_FAMILY: &str = "Noto Sans";

/// Drawable area in device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// Negative and NaN dimensions clamp to zero
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |v: f32| if v.is_nan() { 0.0 } else { v.max(0.0) };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

/// Uniform scale relative to the 600x300 reference canvas
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LayoutScale(f32);

impl LayoutScale {
    /// `min(w / 600, h / 300)` with each dimension clamped to at least 1
    pub fn for_size(size: CanvasSize) -> Self {
        let w = size.width.max(1.0);
        let h = size.height.max(1.0);
        Self((w / REFERENCE_WIDTH).min(h / REFERENCE_HEIGHT))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Scale a reference-canvas length
    pub fn px(self, reference: f32) -> f32 {
        reference * self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
}

/// Requested font family; `None` means the toolkit default sans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: Option<&'static str>,
}

impl FontSpec {
    pub const fn named(family: &'static str) -> Self {
        Self {
            family: Some(family),
        }
    }

    pub const fn default_sans() -> Self {
        Self { family: None }
    }
}

/// Attributes of a single text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub font: FontSpec,
    /// Size in points
    pub size: f32,
    /// Extra spacing between glyphs, in points
    pub letter_spacing: f32,
    pub color: Color,
    pub align: Align,
}

impl PaintStyle {
    fn preset(font: FontSpec, base: f32, min: f32, spacing: f32, alpha: f32, scale: LayoutScale) -> Self {
        Self {
            font,
            size: scale.px(base).round().max(min),
            letter_spacing: scale.px(spacing),
            color: Color::WHITE.with_alpha(alpha),
            align: Align::Center,
        }
    }

    /// Weekday line
    pub fn day(scale: LayoutScale) -> Self {
        Self::preset(FontSpec::named(DISPLAY_FAMILY), 62.0, 12.0, 14.0, 0.95, scale)
    }

    /// Date line
    pub fn date(scale: LayoutScale) -> Self {
        Self::preset(FontSpec::named(BODY_FAMILY), 14.0, 8.0, 5.0, 0.70, scale)
    }

    /// Time line
    pub fn time(scale: LayoutScale) -> Self {
        Self::preset(FontSpec::named(BODY_FAMILY), 15.0, 8.0, 4.0, 0.55, scale)
    }
}

/// Anchor point and style for one line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSlot {
    pub anchor: Vec2,
    pub style: PaintStyle,
}

/// Stroke parameters for line segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

/// Horizontal decorative rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

/// Every position, size and paint source of the clock face for one canvas size
#[derive(Debug, Clone, PartialEq)]
pub struct ClockLayout {
    pub size: CanvasSize,
    pub scale: LayoutScale,
    pub center: Vec2,
    pub background: LinearGradient,
    pub vignette: RadialGradient,
    pub day: TextSlot,
    pub date: TextSlot,
    pub time: TextSlot,
    pub rules: [Rule; 2],
}

impl ClockLayout {
    pub fn compute(size: CanvasSize) -> Self {
        let scale = LayoutScale::for_size(size);
        let center = size.center();
        let at = |dy: f32| Vec2::new(center.x, center.y + scale.px(dy));

        let stroke = Stroke {
            width: scale.px(1.0).max(0.5),
            color: Color::WHITE.with_alpha(0.12),
        };
        let half = scale.px(90.0);
        let rule = |dy: f32| {
            let y = center.y + scale.px(dy);
            Rule {
                from: Vec2::new(center.x - half, y),
                to: Vec2::new(center.x + half, y),
                stroke,
            }
        };

        Self {
            size,
            scale,
            center,
            background: background_gradient(size),
            vignette: vignette_gradient(size),
            day: TextSlot {
                anchor: at(-42.0),
                style: PaintStyle::day(scale),
            },
            date: TextSlot {
                anchor: at(24.0),
                style: PaintStyle::date(scale),
            },
            time: TextSlot {
                anchor: at(62.0),
                style: PaintStyle::time(scale),
            },
            rules: [rule(-70.0), rule(85.0)],
        }
    }
}

/// Dark diagonal gradient, top-left to bottom-right
fn background_gradient(size: CanvasSize) -> LinearGradient {
    LinearGradient::new(
        Vec2::ZERO,
        Vec2::new(size.width, size.height),
        vec![
            ColorStop::new(0.0, Color::rgb(0.22, 0.22, 0.24)),
            ColorStop::new(0.5, Color::rgb(0.16, 0.16, 0.18)),
            ColorStop::new(1.0, Color::rgb(0.10, 0.10, 0.12)),
        ],
    )
}

/// Black radial overlay, transparent in the middle and darker at the edges
fn vignette_gradient(size: CanvasSize) -> RadialGradient {
    RadialGradient::new(
        size.center(),
        size.longest_side() * 0.7,
        vec![
            ColorStop::new(0.0, Color::BLACK.with_alpha(0.0)),
            ColorStop::new(0.6, Color::BLACK.with_alpha(0.05)),
            ColorStop::new(1.0, Color::BLACK.with_alpha(0.35)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scale_is_one() {
        let scale = LayoutScale::for_size(CanvasSize::new(600.0, 300.0));
        assert_eq!(scale.get(), 1.0);
    }

    #[test]
    fn test_scale_takes_tighter_axis() {
        assert_eq!(LayoutScale::for_size(CanvasSize::new(1200.0, 300.0)).get(), 1.0);
        assert_eq!(LayoutScale::for_size(CanvasSize::new(300.0, 300.0)).get(), 0.5);
    }

    #[test]
    fn test_zero_dimensions_clamp() {
        let scale = LayoutScale::for_size(CanvasSize::new(0.0, 0.0));
        assert!(scale.get() > 0.0);
        assert!(scale.get().is_finite());
    }

    #[test]
    fn test_negative_and_nan_clamp_to_zero() {
        let size = CanvasSize::new(-20.0, f32::NAN);
        assert_eq!(size.width, 0.0);
        assert_eq!(size.height, 0.0);
    }

    #[test]
    fn test_minimum_font_sizes() {
        let tiny = LayoutScale::for_size(CanvasSize::new(10.0, 10.0));
        assert_eq!(PaintStyle::day(tiny).size, 12.0);
        assert_eq!(PaintStyle::date(tiny).size, 8.0);
        assert_eq!(PaintStyle::time(tiny).size, 8.0);
    }

    #[test]
    fn test_font_size_rounds() {
        // 62 * 1.5 = 93, 14 * 1.5 = 21, 15 * 1.5 = 22.5 -> 23
        let scale = LayoutScale::for_size(CanvasSize::new(900.0, 450.0));
        assert_eq!(PaintStyle::day(scale).size, 93.0);
        assert_eq!(PaintStyle::date(scale).size, 21.0);
        assert_eq!(PaintStyle::time(scale).size, 23.0);
    }

    #[test]
    fn test_rules_span_center() {
        let layout = ClockLayout::compute(CanvasSize::new(600.0, 300.0));
        let [top, bottom] = layout.rules;
        assert_eq!(top.from, Vec2::new(210.0, 80.0));
        assert_eq!(top.to, Vec2::new(390.0, 80.0));
        assert_eq!(bottom.from.y, 235.0);
        assert_eq!(top.stroke.width, 1.0);
    }

    #[test]
    fn test_stroke_width_floor() {
        let layout = ClockLayout::compute(CanvasSize::new(60.0, 30.0));
        assert_eq!(layout.rules[0].stroke.width, 0.5);
    }

    #[test]
    fn test_vignette_radius() {
        let layout = ClockLayout::compute(CanvasSize::new(620.0, 320.0));
        assert!((layout.vignette.radius - 434.0).abs() < 1e-3);
        assert_eq!(layout.vignette.center, Vec2::new(310.0, 160.0));
    }
}
