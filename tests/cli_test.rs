use std::process::{Command, Output};

fn small_calc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_small-calc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run small-calc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_eval_success() {
    let output = small_calc(&["eval", "10", "+", "5"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "15.0");
}

#[test]
fn test_eval_negative_operands() {
    let output = small_calc(&["eval", "-4", "-", "-2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "-2.0");
}

#[test]
fn test_eval_division_by_zero_exits_2() {
    let output = small_calc(&["eval", "10", "/", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Division by zero"));
}

#[test]
fn test_eval_invalid_operation_exits_1() {
    let output = small_calc(&["eval", "10", "%", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Operation '%' not found!"));
}

#[test]
fn test_eval_invalid_input_exits_1() {
    let output = small_calc(&["eval", "ten", "+", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid number: 'ten'!"));
}

#[test]
fn test_describe() {
    let output = small_calc(&["describe", "/"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Division");

    let output = small_calc(&["describe", "%"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_keys_prints_messages_then_display() {
    let output = small_calc(&["keys", "10/0="]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Operation: Division\nError: Division by zero is not allowed! (entry cleared)\n0"
    );
}

#[test]
fn test_list_json() {
    let output = small_calc(&["list", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 4);
}

#[test]
fn test_invalid_precision_exits_2() {
    let output = small_calc(&["eval", "1", "+", "1", "--precision", "40"]);
    assert_eq!(output.status.code(), Some(2));
}
