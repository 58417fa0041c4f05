use std::sync::Arc;

use egui::epaint::Mesh;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Galley, Pos2, Shape};
use glam::Vec2;

use super::canvas::{Canvas, Rect, TextBlock, TextRun};
use super::fonts::FontRegistry;
use super::layout::Stroke;
use crate::math::{Color, LinearGradient, RadialGradient};

/// Grid resolution used to tessellate gradients into vertex-colored meshes
const GRADIENT_STEPS: u32 = 24;

/// Font sizes are given in points; egui lays out in pixels at 96 dpi.
/// Letter spacing is already in pixels.
const POINTS_TO_PIXELS: f32 = 96.0 / 72.0;

/// Canvas backed by an egui painter
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    fonts: &'a FontRegistry,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, fonts: &'a FontRegistry) -> Self {
        Self { painter, fonts }
    }

    fn text_format(&self, run: &TextRun) -> TextFormat {
        let family = self.fonts.resolve(run.style.font).to_egui();
        TextFormat {
            font_id: FontId::new(run.style.size * POINTS_TO_PIXELS, family),
            extra_letter_spacing: run.style.letter_spacing,
            color: to_color32(run.style.color),
            ..Default::default()
        }
    }
}

impl TextBlock for Arc<Galley> {
    fn size(&self) -> Vec2 {
        let size = Galley::size(self);
        Vec2::new(size.x, size.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    type Block = Arc<Galley>;

    fn fill_linear(&mut self, rect: Rect, gradient: &LinearGradient) {
        if rect.is_empty() {
            return;
        }
        let mesh = gradient_mesh(rect, GRADIENT_STEPS, |p| gradient.color_at(p));
        self.painter.add(Shape::mesh(mesh));
    }

    fn fill_radial(&mut self, rect: Rect, gradient: &RadialGradient) {
        if rect.is_empty() {
            return;
        }
        let mesh = gradient_mesh(rect, GRADIENT_STEPS, |p| gradient.color_at(p));
        self.painter.add(Shape::mesh(mesh));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.painter.line_segment(
            [to_pos(from), to_pos(to)],
            egui::Stroke::new(stroke.width, to_color32(stroke.color)),
        );
    }

    fn layout_text(&mut self, run: &TextRun) -> Arc<Galley> {
        let mut job = LayoutJob::default();
        job.append(&run.text, 0.0, self.text_format(run));
        self.painter.layout_job(job)
    }

    fn draw_text(&mut self, origin: Vec2, block: Arc<Galley>) {
        self.painter.galley(to_pos(origin), block, Color32::WHITE);
    }
}

fn to_pos(v: Vec2) -> Pos2 {
    egui::pos2(v.x, v.y)
}

pub fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Regular `steps` x `steps` grid over `rect`, each vertex colored by `sample`
fn gradient_mesh(rect: Rect, steps: u32, sample: impl Fn(Vec2) -> Color) -> Mesh {
    let steps = steps.max(1);
    let size = rect.size();
    let mut mesh = Mesh::default();

    for row in 0..=steps {
        for col in 0..=steps {
            let t = Vec2::new(col as f32, row as f32) / steps as f32;
            let point = rect.min + size * t;
            mesh.colored_vertex(to_pos(point), to_color32(sample(point)));
        }
    }

    let stride = steps + 1;
    for row in 0..steps {
        for col in 0..steps {
            let i = row * stride + col;
            mesh.add_triangle(i, i + 1, i + stride);
            mesh.add_triangle(i + 1, i + stride + 1, i + stride);
        }
    }

    mesh
}
