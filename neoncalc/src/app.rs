//! NeonCalc application

use crate::theme::{menu_bar, Palette};
use egui::{Context, Key};
use neoncore::keymap::commands_for_text;
use neoncore::{command_for, AppState, Command, KeyInput, Mode, ScientificFunction};

const STANDARD_ROWS: [&[&str]; 5] = [
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "=", "+"],
    &["C", "DEL", "Theme", "Exit"],
];

const SCIENTIFIC_ROWS: [&[&str]; 5] = [
    &["sqrt", "square", "cube", "pow", "ten_pow"],
    &["sin", "cos", "tan", "asin", "acos"],
    &["atan", "sinh", "cosh", "tanh", "log2"],
    &["ln", "log", "exp", "inv", "neg"],
    &["pi", "e", "C", "DEL", "Back"],
];

const BUTTON_HEIGHT: f32 = 52.0;
const DISPLAY_HEIGHT: f32 = 56.0;

pub struct NeonCalcApp {
    state: AppState,
    /// Theme currently installed in the egui context.
    applied_dark: Option<bool>,
}

impl NeonCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Self {
            state,
            applied_dark: None,
        }
    }

    fn sync_theme(&mut self, ctx: &Context) {
        let dark = self.state.is_dark();
        if self.applied_dark != Some(dark) {
            Palette::for_theme(dark).apply(ctx);
            self.applied_dark = Some(dark);
        }
    }
}

/// What a grid button does when clicked.
fn button_command(label: &str) -> Option<Command> {
    match label {
        "=" => Some(Command::Evaluate),
        "C" => Some(Command::Clear),
        "DEL" => Some(Command::Delete),
        "Theme" => Some(Command::ToggleTheme),
        "Exit" => Some(Command::Exit),
        "Back" => Some(Command::SelectMode(Mode::Standard)),
        _ => {
            if let Ok(function) = label.parse::<ScientificFunction>() {
                Some(Command::Invoke(function))
            } else if label.chars().all(|c| command_for(KeyInput::Char(c)).is_some()) {
                Some(Command::Press(label.to_string()))
            } else {
                None
            }
        }
    }
}

fn key_commands(ctx: &Context, commands: &mut Vec<Command>) {
    ctx.input(|i| {
        for event in &i.events {
            match event {
                egui::Event::Text(text) => commands.extend(commands_for_text(text)),
                egui::Event::Key { key: Key::Enter, pressed: true, .. } => {
                    commands.extend(command_for(KeyInput::Enter))
                }
                egui::Event::Key { key: Key::Backspace, pressed: true, .. } => {
                    commands.extend(command_for(KeyInput::Backspace))
                }
                _ => {}
            }
        }
    });
}

fn render_display(ui: &mut egui::Ui, state: &AppState, palette: &Palette) {
    palette.display_frame().show(ui, |ui| {
        ui.set_min_height(DISPLAY_HEIGHT);
        ui.set_max_height(DISPLAY_HEIGHT);
        ui.set_width(ui.available_width());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(state.display())
                    .font(egui::FontId::monospace(26.0))
                    .color(palette.text)
                    .strong(),
            );
        });
    });
}

fn render_tabs(ui: &mut egui::Ui, state: &AppState, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        for (mode, label) in [(Mode::Standard, "Standard"), (Mode::Scientific, "Scientific")] {
            if ui.selectable_label(state.mode() == mode, label).clicked() {
                commands.push(Command::SelectMode(mode));
            }
        }
    });
}

fn render_grid(ui: &mut egui::Ui, rows: &[&[&str]], commands: &mut Vec<Command>) {
    for row in rows {
        let spacing = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - spacing * (row.len() - 1) as f32) / row.len() as f32;
        ui.horizontal(|ui| {
            for label in row.iter() {
                let button = egui::Button::new(egui::RichText::new(*label).strong());
                if ui.add_sized([btn_w, BUTTON_HEIGHT], button).clicked() {
                    commands.extend(button_command(label));
                }
            }
        });
    }
}

fn render_about(ctx: &Context, commands: &mut Vec<Command>) {
    egui::Window::new("About")
        .collapsible(false)
        .resizable(false)
        .default_width(260.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(crate::TITLE);
                ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(4.0);
            });
            ui.separator();
            ui.label("keys: 0-9 . + - * / ^ ( )");
            ui.label("Enter evaluates, Backspace deletes");
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                if ui.button("ok").clicked() {
                    commands.push(Command::HideAbout);
                }
            });
        });
}

impl eframe::App for NeonCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);
        let palette = Palette::for_theme(self.state.is_dark());
        let mut commands = Vec::new();

        // Keys go to the calculator unless a dialog is up.
        if !self.state.show_about() {
            key_commands(ctx, &mut commands);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, &palette, |ui| {
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        commands.push(Command::ShowAbout);
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.background).inner_margin(egui::Margin::same(12.0)))
            .show(ctx, |ui| {
                render_display(ui, &self.state, &palette);
                ui.add_space(12.0);
                render_tabs(ui, &self.state, &mut commands);
                ui.add_space(8.0);

                match self.state.mode() {
                    Mode::Standard => render_grid(ui, &STANDARD_ROWS, &mut commands),
                    Mode::Scientific => render_grid(ui, &SCIENTIFIC_ROWS, &mut commands),
                }
            });

        if self.state.show_about() {
            render_about(ctx, &mut commands);
        }

        let had_commands = !commands.is_empty();
        for command in commands {
            self.state.update(command);
        }

        if self.state.exit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else if had_commands {
            ctx.request_repaint();
        }
    }
}
