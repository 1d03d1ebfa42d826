//! Header component with the gradient page title.

use crate::ui::theme;
use eframe::egui;

pub struct Header;

impl Header {
    pub fn show(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            ui.label(theme::gradient_text(
                "Transaction Summary",
                30.0,
                theme::TITLE_GRADIENT,
            ));
            ui.add_space(8.0);
        });
    }
}
