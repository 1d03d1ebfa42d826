//! Total owe / total receive cards.

use crate::ui::theme;
use eframe::egui;
use egui::{RichText, Stroke};
use split_core::view::{Layout, SummaryView, Tone};

pub fn show(ui: &mut egui::Ui, summary: &SummaryView, layout: Layout) {
    match layout {
        Layout::Mobile => show_combined(ui, summary),
        Layout::Desktop => show_cards(ui, summary),
    }
}

// One card split in two halves
fn show_combined(ui: &mut egui::Ui, summary: &SummaryView) {
    egui::Frame::none()
        .fill(theme::CARD_FILL.gamma_multiply(0.8))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.columns(2, |cols| {
                slot(&mut cols[0], Tone::Owe, "Total Owe", &summary.total_owe, 20.0);
                slot(
                    &mut cols[1],
                    Tone::Receive,
                    "Total Receive",
                    &summary.total_receive,
                    20.0,
                );
            });
        });
}

fn show_cards(ui: &mut egui::Ui, summary: &SummaryView) {
    ui.add_space(16.0);
    ui.columns(2, |cols| {
        card(&mut cols[0], Tone::Owe, "Total Owe", &summary.total_owe);
        card(
            &mut cols[1],
            Tone::Receive,
            "Total Receive",
            &summary.total_receive,
        );
    });
    ui.add_space(16.0);
}

fn card(ui: &mut egui::Ui, tone: Tone, title: &str, amount: &str) {
    let border = match tone {
        Tone::Owe => theme::OWE_BORDER,
        Tone::Receive => theme::RECEIVE_BORDER,
    };

    egui::Frame::none()
        .fill(theme::CARD_FILL.gamma_multiply(0.6))
        .stroke(Stroke::new(1.0, border.gamma_multiply(0.5)))
        .rounding(8.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            slot(ui, tone, title, amount, 30.0);
        });
}

fn slot(ui: &mut egui::Ui, tone: Tone, title: &str, amount: &str, amount_size: f32) {
    ui.vertical_centered(|ui| {
        ui.label(theme::gradient_text(
            title,
            amount_size * 0.6,
            theme::tone_gradient(tone),
        ));
        ui.label(
            RichText::new(amount)
                .size(amount_size)
                .strong()
                .color(theme::tone_color(tone)),
        );
    });
}
