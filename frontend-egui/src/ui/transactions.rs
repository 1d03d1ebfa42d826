//! Header of the transactions route for one friend.

use crate::ui::theme;
use eframe::egui;
use egui::{RichText, Stroke};
use split_core::view::FriendRow;

/// Returns true when the user asked to go back to the dashboard.
pub fn show(ui: &mut egui::Ui, row: Option<&FriendRow>, friend: &str) -> bool {
    let back = ui.button("← Dashboard").clicked();
    ui.add_space(16.0);

    ui.vertical_centered(|ui| match row {
        Some(row) => {
            let avatar = ui.add(
                egui::Image::new(row.avatar_url.as_str())
                    .fit_to_exact_size(egui::vec2(96.0, 96.0))
                    .rounding(48.0),
            );
            ui.painter().circle_stroke(
                avatar.rect.center(),
                48.0,
                Stroke::new(2.0, theme::BLUE_400),
            );

            ui.add_space(8.0);
            ui.label(RichText::new(&row.name).size(24.0).strong());
            ui.label(RichText::new(&row.handle).size(14.0).color(theme::GRAY_400));
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("You {} {}", row.tone.label(), row.amount))
                    .size(22.0)
                    .strong()
                    .color(theme::tone_color(row.tone)),
            );
        }
        None => {
            ui.label(
                RichText::new(format!("No outstanding balance with @{friend}"))
                    .color(theme::GRAY_400),
            );
        }
    });

    back
}
