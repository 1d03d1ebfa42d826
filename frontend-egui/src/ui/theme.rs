//! Colors and text styles shared by the dashboard components.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId};
use split_core::view::{Layout, Tone};

pub const RED_400: Color32 = Color32::from_rgb(248, 113, 113);
pub const GREEN_400: Color32 = Color32::from_rgb(74, 222, 128);
pub const BLUE_400: Color32 = Color32::from_rgb(96, 165, 250);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);
pub const GRAY_800: Color32 = Color32::from_rgb(31, 41, 55);
pub const GRAY_900: Color32 = Color32::from_rgb(17, 24, 39);
pub const GRAY_950: Color32 = Color32::from_rgb(3, 7, 18);
pub const SLATE_900: Color32 = Color32::from_rgb(15, 23, 42);

pub const CARD_FILL: Color32 = Color32::from_rgb(30, 30, 30);
pub const OWE_BORDER: Color32 = Color32::from_rgb(255, 69, 69);
pub const RECEIVE_BORDER: Color32 = Color32::from_rgb(69, 255, 144);

pub const TITLE_GRADIENT: (Color32, Color32) =
    (Color32::from_rgb(0, 180, 219), Color32::from_rgb(0, 255, 148));
pub const OWE_GRADIENT: (Color32, Color32) =
    (Color32::from_rgb(255, 122, 122), Color32::from_rgb(255, 75, 75));
pub const RECEIVE_GRADIENT: (Color32, Color32) =
    (Color32::from_rgb(119, 255, 217), Color32::from_rgb(69, 255, 143));

/// Global dark theme with slightly roomier spacing.
pub fn install(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(Color32::WHITE);
    visuals.panel_fill = SLATE_900;
    visuals.window_fill = SLATE_900;
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    ctx.set_style(style);
}

pub fn background(layout: Layout) -> Color32 {
    match layout {
        Layout::Mobile => SLATE_900,
        Layout::Desktop => GRAY_950,
    }
}

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Owe => RED_400,
        Tone::Receive => GREEN_400,
    }
}

pub fn tone_gradient(tone: Tone) -> (Color32, Color32) {
    match tone {
        Tone::Owe => OWE_GRADIENT,
        Tone::Receive => RECEIVE_GRADIENT,
    }
}

pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

/// Text colored character by character from `gradient.0` to `gradient.1`.
pub fn gradient_text(text: &str, size: f32, gradient: (Color32, Color32)) -> LayoutJob {
    let count = text.chars().count();
    let span = count.saturating_sub(1).max(1) as f32;

    let mut job = LayoutJob::default();
    let mut buf = [0u8; 4];
    for (i, c) in text.chars().enumerate() {
        job.append(
            c.encode_utf8(&mut buf),
            0.0,
            TextFormat {
                font_id: FontId::proportional(size),
                color: lerp_color(gradient.0, gradient.1, i as f32 / span),
                ..Default::default()
            },
        );
    }
    job
}
