//! Scientific functions available on the scientific panel

use crate::error::{CalcError, Result};
use crate::parser::{eval, power};
use std::fmt;
use std::str::FromStr;

/// Largest n for which n! fits in an f64.
const MAX_FACTORIAL: u32 = 170;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScientificFunction {
    Sqrt,
    Square,
    Cube,
    Pow,
    TenPow,
    Log2,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Log,
    Ln,
    Exp,
    Inv,
    Neg,
    Fact,
    Pi,
    E,
}

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 23] = [
        Self::Sqrt,
        Self::Square,
        Self::Cube,
        Self::Pow,
        Self::TenPow,
        Self::Log2,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Log,
        Self::Ln,
        Self::Exp,
        Self::Inv,
        Self::Neg,
        Self::Fact,
        Self::Pi,
        Self::E,
    ];

    /// Identifier used on buttons and in [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Pow => "pow",
            Self::TenPow => "ten_pow",
            Self::Log2 => "log2",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Inv => "inv",
            Self::Neg => "neg",
            Self::Fact => "fact",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Constants don't look at the buffer at all.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// Apply the function to the current expression text.
    ///
    /// An empty buffer is the operand 0; anything else is evaluated as an
    /// arithmetic expression first. `pow` additionally splits the text on a
    /// single `^` into base and exponent.
    pub fn apply_to_buffer(self, buffer: &str) -> Result<f64> {
        if self.is_constant() {
            return self.apply(0.0);
        }
        let value = operand(buffer)?;
        if self == Self::Pow {
            if let Some((base, exponent)) = buffer.split_once('^') {
                if !exponent.contains('^') {
                    return finite(power(eval(base)?, eval(exponent)?)?);
                }
            }
        }
        self.apply(value)
    }

    /// Apply the function to a single operand `x`.
    ///
    /// Defined for every variant: constants ignore `x` and `pow` with one
    /// operand squares it.
    pub fn apply(self, x: f64) -> Result<f64> {
        let domain = |function| CalcError::Domain { function, operand: x };
        let result = match self {
            Self::Sqrt if x < 0.0 => return Err(domain("sqrt")),
            Self::Sqrt => x.sqrt(),
            Self::Square | Self::Pow => x * x,
            Self::Cube => x * x * x,
            Self::TenPow => 10f64.powf(x),
            Self::Log2 if x <= 0.0 => return Err(domain("log2")),
            Self::Log2 => x.log2(),
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => x.to_radians().tan(),
            Self::Asin if !(-1.0..=1.0).contains(&x) => return Err(domain("asin")),
            Self::Asin => x.asin().to_degrees(),
            Self::Acos if !(-1.0..=1.0).contains(&x) => return Err(domain("acos")),
            Self::Acos => x.acos().to_degrees(),
            Self::Atan => x.atan().to_degrees(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Log if x <= 0.0 => return Err(domain("log")),
            Self::Log => x.log10(),
            Self::Ln if x <= 0.0 => return Err(domain("ln")),
            Self::Ln => x.ln(),
            Self::Exp => x.exp(),
            Self::Inv if x == 0.0 => return Err(CalcError::DivisionByZero),
            Self::Inv => 1.0 / x,
            Self::Neg => -x,
            Self::Fact => factorial(x)?,
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        };
        finite(result)
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScientificFunction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.id() == s)
            .ok_or_else(|| CalcError::UnknownFunction(s.to_string()))
    }
}

fn operand(buffer: &str) -> Result<f64> {
    if buffer.trim().is_empty() {
        Ok(0.0)
    } else {
        eval(buffer)
    }
}

fn factorial(x: f64) -> Result<f64> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(CalcError::Domain { function: "fact", operand: x });
    }
    if x > MAX_FACTORIAL as f64 {
        return Err(CalcError::NotFinite);
    }
    Ok((2..=x as u32).fold(1.0, |acc, n| acc * n as f64))
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NotFinite)
    }
}
