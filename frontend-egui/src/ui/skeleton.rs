//! Pulsing placeholder shown while the summary loads.

use crate::ui::{animation, theme};
use eframe::egui;
use egui::{Color32, Sense};
use split_core::view::Layout;

const PLACEHOLDER_ROWS: usize = 5;

pub fn show(ui: &mut egui::Ui, layout: Layout) {
    let color = theme::GRAY_800.gamma_multiply(animation::pulse(ui.input(|i| i.time)));

    ui.vertical_centered(|ui| {
        ui.add_space(4.0);
        block(ui, egui::vec2(260.0, 32.0), color);
        ui.add_space(8.0);
    });

    let avatar = match layout {
        Layout::Mobile => {
            let width = ui.available_width();
            block(ui, egui::vec2(width, 72.0), color);
            48.0
        }
        Layout::Desktop => {
            ui.add_space(16.0);
            ui.columns(2, |cols| {
                for col in cols.iter_mut() {
                    let width = col.available_width();
                    block(col, egui::vec2(width, 110.0), color);
                }
            });
            ui.add_space(16.0);
            64.0
        }
    };

    ui.add_space(8.0);
    for _ in 0..PLACEHOLDER_ROWS {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(avatar, avatar), Sense::hover());
            ui.painter().circle_filled(rect.center(), avatar / 2.0, color);

            ui.vertical(|ui| {
                block(ui, egui::vec2(140.0, 16.0), color);
                block(ui, egui::vec2(90.0, 12.0), color);
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                block(ui, egui::vec2(60.0, 20.0), color);
            });
        });
        ui.add_space(12.0);
    }

    ui.ctx().request_repaint();
}

fn block(ui: &mut egui::Ui, size: egui::Vec2, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter().rect_filled(rect, 6.0, color);
}
