use egui::style::WidgetVisuals;
use egui::{Align2, Color32, CornerRadius, Id, RichText, Stroke, Vec2};

use crate::core::Action;
use crate::shell::ClockShell;

/// Distance of the button row from the top-right corner
const MARGIN: f32 = 8.0;
const SPACING: f32 = 6.0;
const BUTTON_SIZE: f32 = 28.0;
const FONT_SIZE: f32 = 14.0;
const RADIUS: u8 = 6;

fn white(alpha: f32) -> Color32 {
    Color32::from_white_alpha((alpha * 255.0).round() as u8)
}

/// Translucent pill buttons; brighter fill, text and border on hover
pub fn control_visuals(visuals: &mut egui::Visuals) {
    let idle = WidgetVisuals {
        bg_fill: white(0.08),
        weak_bg_fill: white(0.08),
        bg_stroke: Stroke::new(1.0, white(0.10)),
        corner_radius: CornerRadius::same(RADIUS),
        fg_stroke: Stroke::new(1.0, white(0.50)),
        expansion: 0.0,
    };
    let hovered = WidgetVisuals {
        bg_fill: white(0.18),
        weak_bg_fill: white(0.18),
        bg_stroke: Stroke::new(1.0, white(0.30)),
        fg_stroke: Stroke::new(1.0, white(0.85)),
        ..idle
    };

    visuals.widgets.inactive = idle;
    visuals.widgets.hovered = hovered;
    visuals.widgets.active = hovered;
}

/// Borderless and pin buttons in the top-right corner; returns the clicked action
pub fn show(ctx: &egui::Context, shell: &ClockShell) -> Option<Action> {
    let mut clicked = None;

    egui::Area::new(Id::new("clock-controls"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-MARGIN, MARGIN))
        .show(ctx, |ui| {
            control_visuals(ui.visuals_mut());
            ui.spacing_mut().item_spacing.x = SPACING;

            ui.horizontal(|ui| {
                let button = |label: &str| {
                    egui::Button::new(RichText::new(label).size(FONT_SIZE))
                        .min_size(Vec2::splat(BUTTON_SIZE))
                };

                if ui
                    .add(button(shell.borderless_label()))
                    .on_hover_text(shell.borderless_tooltip())
                    .clicked()
                {
                    clicked = Some(Action::ToggleBorderless);
                }
                if ui
                    .add(button(shell.pin_label()))
                    .on_hover_text(shell.pin_tooltip())
                    .clicked()
                {
                    clicked = Some(Action::TogglePin);
                }
            });
        });

    clicked
}
