//! Per-friend balance list with mobile and desktop variants.

use crate::ui::{animation, theme};
use eframe::egui;
use egui::{Color32, RichText, Stroke};
use split_core::view::{FriendRow, Layout};
use split_core::Route;

struct RowMetrics {
    avatar: f32,
    avatar_border: bool,
    name_size: f32,
    amount_size: f32,
    padding: f32,
    fill: Color32,
}

impl RowMetrics {
    fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Mobile => Self {
                avatar: 48.0,
                avatar_border: false,
                name_size: 16.0,
                amount_size: 16.0,
                padding: 12.0,
                fill: Color32::TRANSPARENT,
            },
            Layout::Desktop => Self {
                avatar: 64.0,
                avatar_border: true,
                name_size: 18.0,
                amount_size: 20.0,
                padding: 16.0,
                fill: theme::GRAY_900,
            },
        }
    }
}

pub struct FriendList;

impl FriendList {
    /// Draws the rows. Returns the route of a clicked row.
    pub fn show(
        ui: &mut egui::Ui,
        rows: &[FriendRow],
        layout: Layout,
        elapsed: f64,
    ) -> Option<Route> {
        let metrics = RowMetrics::for_layout(layout);
        let mut selected = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, row) in rows.iter().enumerate() {
                    let opacity = animation::row_opacity(elapsed, index);
                    if show_row(ui, row, &metrics, opacity).clicked() {
                        selected = Some(row.route.clone());
                    }

                    match layout {
                        Layout::Mobile => {
                            ui.separator();
                        }
                        Layout::Desktop => ui.add_space(12.0),
                    }
                }
            });

        selected
    }
}

fn show_row(
    ui: &mut egui::Ui,
    row: &FriendRow,
    metrics: &RowMetrics,
    opacity: f32,
) -> egui::Response {
    let faded = |color: Color32| color.gamma_multiply(opacity);

    let inner = egui::Frame::none()
        .fill(faded(metrics.fill))
        .rounding(8.0)
        .inner_margin(metrics.padding)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let avatar = ui.add(
                    egui::Image::new(row.avatar_url.as_str())
                        .fit_to_exact_size(egui::vec2(metrics.avatar, metrics.avatar))
                        .rounding(metrics.avatar / 2.0)
                        .tint(faded(Color32::WHITE)),
                );
                if metrics.avatar_border {
                    ui.painter().circle_stroke(
                        avatar.rect.center(),
                        metrics.avatar / 2.0,
                        Stroke::new(2.0, faded(theme::BLUE_400)),
                    );
                }

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&row.name)
                            .size(metrics.name_size)
                            .strong()
                            .color(faded(Color32::WHITE)),
                    );
                    ui.label(
                        RichText::new(&row.handle)
                            .size(14.0)
                            .color(faded(theme::GRAY_400)),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&row.amount)
                            .size(metrics.amount_size)
                            .strong()
                            .color(faded(theme::tone_color(row.tone))),
                    )
                    .on_hover_text(format!("You {} {}", row.tone.label(), row.amount));
                });
            });
        });

    ui.interact(
        inner.response.rect,
        ui.id().with(("friend", &row.username)),
        egui::Sense::click(),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
