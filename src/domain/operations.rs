//! Built-in arithmetic operations.

use crate::domain::ports::Operation;
use crate::utils::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

#[derive(Debug, Clone, Copy, Default)]
pub struct Subtraction;

#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplication;

#[derive(Debug, Clone, Copy, Default)]
pub struct Division;

impl Operation for Addition {
    fn symbol(&self) -> &'static str {
        "+"
    }

    fn description(&self) -> &'static str {
        "Addition"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a + b)
    }
}

impl Operation for Subtraction {
    fn symbol(&self) -> &'static str {
        "-"
    }

    fn description(&self) -> &'static str {
        "Subtraction"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a - b)
    }
}

impl Operation for Multiplication {
    fn symbol(&self) -> &'static str {
        "*"
    }

    fn description(&self) -> &'static str {
        "Multiplication"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a * b)
    }
}

impl Operation for Division {
    fn symbol(&self) -> &'static str {
        "/"
    }

    fn description(&self) -> &'static str {
        "Division"
    }

    /// Fails with [`CalcError::DivisionByZero`] when `b` is zero (either sign).
    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}
