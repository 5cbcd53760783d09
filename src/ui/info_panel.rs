//! Info card showing the selected planet.
//!
//! Rendered only while a selection is active; dismissing clears the
//! selection and removes the card entirely.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::selection::Selection;

use super::icons;

/// Colors for the info card.
mod colors {
    use bevy_egui::egui::Color32;

    pub const CARD_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 230);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// System that renders the info card for the selected planet.
pub fn info_panel(mut contexts: EguiContexts, mut selection: ResMut<Selection>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Some(planet) = selection.selected().cloned() else {
        return;
    };

    let card_frame = egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(6)
        .inner_margin(egui::Margin::same(12));

    egui::Window::new("planet_card")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .frame(card_frame)
        .show(ctx, |ui| {
            ui.set_max_width(240.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::PLANET).size(18.0).color(colors::TEXT));
                ui.heading(egui::RichText::new(&planet.name).color(colors::TEXT));
            });

            ui.add_space(4.0);
            ui.label(egui::RichText::new(&planet.description).color(colors::TEXT));
            ui.add_space(8.0);

            if ui
                .button(format!("{} Close", icons::CLOSE))
                .on_hover_text("Dismiss")
                .clicked()
            {
                selection.dismiss();
            }
        });
}
