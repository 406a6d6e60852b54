/// Renders a result for the keypad display.
///
/// Without a precision the shortest round-trip form is used and integral
/// values keep a trailing `.0` (`15.0`). Finite values in either form parse
/// back as an operand; the session never displays a non-finite result.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(decimals) => format!("{:.*}", decimals, value),
        None => format!("{:?}", value),
    }
}
