//! One-shot subcommands of the binary, returning the text to print.

use crate::app::display::format_number;
use crate::app::session::Session;
use crate::core::{Dispatcher, OperationRegistry};
use crate::utils::error::{CalcError, ErrorSeverity, Result};
use crate::utils::validation::parse_operand;

/// Evaluates `<a> <op> <b>` and renders the result.
///
/// A result that overflows to infinity is reported as [`CalcError::Overflow`].
pub fn eval(
    dispatcher: &Dispatcher,
    precision: Option<usize>,
    a: &str,
    op: &str,
    b: &str,
) -> Result<String> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    let result = dispatcher.execute(op, a, b)?;
    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(format_number(result, precision))
}

pub fn list(registry: &OperationRegistry, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&registry.infos())?);
    }

    let lines: Vec<String> = registry
        .list()
        .iter()
        .map(|op| format!("{}  {}", op.symbol(), op.description()))
        .collect();
    Ok(lines.join("\n"))
}

pub fn describe(registry: &OperationRegistry, op: &str) -> Result<&'static str> {
    registry
        .description(op)
        .ok_or_else(|| CalcError::invalid_operation(op))
}

/// Feeds `sequence` through `session`: messages in order, then the display.
pub fn keys(session: &mut Session, sequence: &str) -> Vec<String> {
    let mut lines: Vec<String> = session
        .press_sequence(sequence)
        .iter()
        .filter_map(|outcome| outcome.message())
        .collect();
    lines.push(session.display().to_string());
    lines
}

// 根據錯誤嚴重程度決定退出碼
pub fn exit_code(e: &CalcError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 1,
        ErrorSeverity::High => 2,
        ErrorSeverity::Critical => 3,
    }
}
