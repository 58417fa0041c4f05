use glam::Vec2;

use super::color::Color;

/// Gradient stop at `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Piecewise-linear lookup along sorted stops; clamps outside the first/last stop
fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Color::rgba(0.0, 0.0, 0.0, 0.0),
    };

    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }

    last.color
}

/// Linear gradient along the segment `start -> end`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Color at `point`, projected onto the gradient axis
    pub fn color_at(&self, point: Vec2) -> Color {
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        let t = if len_sq <= f32::EPSILON {
            0.0
        } else {
            (point - self.start).dot(axis) / len_sq
        };
        sample_stops(&self.stops, t)
    }
}

/// Radial gradient from `center` out to `radius`
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }

    pub fn color_at(&self, point: Vec2) -> Color {
        let t = if self.radius <= f32::EPSILON {
            1.0
        } else {
            point.distance(self.center) / self.radius
        };
        sample_stops(&self.stops, t)
    }
}
