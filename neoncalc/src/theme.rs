//! Neon theme — dark and light palettes
//!
//! Electric purple on near-black, or black on light grey. Hovered buttons
//! light up in the accent color.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub const NEON_PURPLE: Color32 = Color32::from_rgb(0xFF, 0x00, 0xFF);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub button: Color32,
    /// Text on buttons and in the display.
    pub text: Color32,
    pub pressed: Color32,
    pub dark: bool,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(0x0D, 0x0D, 0x0D),
        button: Color32::from_rgb(0x1E, 0x1E, 0x1E),
        text: NEON_PURPLE,
        pressed: Color32::from_rgb(0x22, 0x22, 0x22),
        dark: true,
    };

    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(0xEA, 0xEA, 0xEA),
        button: Color32::from_rgb(0xFF, 0xFF, 0xFF),
        text: Color32::from_rgb(0x00, 0x00, 0x00),
        pressed: Color32::from_rgb(0xCC, 0xCC, 0xCC),
        dark: false,
    };

    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Apply the palette to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(16.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(22.0, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if self.dark { Visuals::dark() } else { Visuals::light() };

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.faint_bg_color = self.button;
        visuals.extreme_bg_color = self.button;
        visuals.window_stroke = Stroke::new(1.0, NEON_PURPLE);

        let flat = |ws: &mut egui::style::WidgetVisuals, fill: Color32, fg: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::NONE;
            ws.fg_stroke = Stroke::new(1.0, fg);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive, self.background, self.text);
        flat(&mut visuals.widgets.inactive, self.button, self.text);
        flat(&mut visuals.widgets.hovered, NEON_PURPLE, self.background);
        flat(&mut visuals.widgets.active, self.pressed, self.text);
        flat(&mut visuals.widgets.open, self.button, self.text);

        visuals.selection.bg_fill = NEON_PURPLE;
        visuals.selection.stroke = Stroke::new(1.0, self.background);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Frame around the expression display
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.button)
            .stroke(Stroke::new(1.0, self.text))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    palette: &Palette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(palette.button)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}
