//! Expression accumulator
//!
//! Keystrokes are concatenated into a text buffer without any validation;
//! the text is only parsed when it is evaluated or fed to a scientific
//! function. A successful result replaces the buffer so the next keystrokes
//! continue from it. A failed one empties the buffer and the display reads
//! `"Error"` until the next edit.

use crate::error::{CalcError, Result};
use crate::format::format_result;
use crate::functions::ScientificFunction;
use crate::parser;

/// What the display shows after a failed evaluation.
pub const ERROR_MARKER: &str = "Error";

#[derive(Debug, Default, Clone)]
pub struct ExpressionEngine {
    buffer: String,
    error: Option<CalcError>,
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently typed (empty while in the error state).
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The string to render: the buffer, or [`ERROR_MARKER`].
    pub fn display(&self) -> &str {
        if self.error.is_some() {
            ERROR_MARKER
        } else {
            &self.buffer
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Why the last evaluation failed, until the next edit.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    pub fn append(&mut self, token: &str) {
        self.error = None;
        self.buffer.push_str(token);
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.buffer.clear();
    }

    pub fn delete_last(&mut self) {
        self.error = None;
        self.buffer.pop();
    }

    /// Evaluate the buffer as an arithmetic expression.
    pub fn evaluate(&mut self) -> &str {
        let outcome = parser::eval(&self.buffer);
        self.settle(outcome)
    }

    /// Apply a scientific function to the buffer.
    pub fn apply_function(&mut self, function: ScientificFunction) -> &str {
        let outcome = function.apply_to_buffer(&self.buffer);
        self.settle(outcome)
    }

    fn settle(&mut self, outcome: Result<f64>) -> &str {
        match outcome {
            Ok(value) => {
                self.buffer = format_result(value);
                self.error = None;
            }
            Err(err) => {
                log::debug!("evaluation of {:?} failed: {}", self.buffer, err);
                self.buffer.clear();
                self.error = Some(err);
            }
        }
        self.display()
    }
}
