//! neoncore — calculator logic for the neon calculator
//!
//! Everything here is independent of any UI toolkit: the expression engine,
//! its parser and scientific functions, result formatting, the persisted
//! theme preference and the command-driven [`AppState`].

pub mod engine;
pub mod error;
pub mod format;
pub mod functions;
pub mod keymap;
pub mod lexer;
pub mod parser;
pub mod state;
pub mod storage;
pub mod theme;

pub use engine::{ExpressionEngine, ERROR_MARKER};
pub use error::{CalcError, StorageError};
pub use format::format_result;
pub use functions::ScientificFunction;
pub use keymap::{command_for, KeyInput};
pub use parser::eval;
pub use state::{AppState, Command, Mode};
pub use theme::ThemeStore;
