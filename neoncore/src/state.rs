//! Application state and the commands that change it
//!
//! The presentation layer owns one [`AppState`], turns clicks and key
//! presses into [`Command`]s, feeds them to [`AppState::update`] and redraws
//! from [`AppState::display`] and [`AppState::is_dark`].

use crate::engine::ExpressionEngine;
use crate::functions::ScientificFunction;
use crate::theme::ThemeStore;

/// Which button panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Standard,
    Scientific,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a digit, operator or other literal text.
    Press(String),
    Clear,
    Delete,
    Evaluate,
    Invoke(ScientificFunction),
    ToggleTheme,
    SelectMode(Mode),
    ShowAbout,
    HideAbout,
    Exit,
}

pub struct AppState {
    engine: ExpressionEngine,
    store: ThemeStore,
    dark: bool,
    mode: Mode,
    show_about: bool,
    exit_requested: bool,
}

impl AppState {
    /// Fresh state with the theme flag read from `store`.
    pub fn new(store: ThemeStore) -> Self {
        let dark = store.load();
        Self {
            engine: ExpressionEngine::new(),
            store,
            dark,
            mode: Mode::Standard,
            show_about: false,
            exit_requested: false,
        }
    }

    pub fn update(&mut self, command: Command) {
        match command {
            Command::Press(token) => self.engine.append(&token),
            Command::Clear => self.engine.clear(),
            Command::Delete => self.engine.delete_last(),
            Command::Evaluate => {
                self.engine.evaluate();
            }
            Command::Invoke(function) => {
                self.engine.apply_function(function);
            }
            Command::ToggleTheme => self.toggle_theme(),
            Command::SelectMode(mode) => self.mode = mode,
            Command::ShowAbout => self.show_about = true,
            Command::HideAbout => self.show_about = false,
            Command::Exit => self.exit_requested = true,
        }
    }

    fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        log::info!("switched to {} mode", if self.dark { "dark" } else { "light" });
        if let Err(e) = self.store.save(self.dark) {
            log::warn!("could not save theme preference to {}: {}", self.store.path().display(), e);
        }
    }

    pub fn display(&self) -> &str {
        self.engine.display()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn show_about(&self) -> bool {
        self.show_about
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
