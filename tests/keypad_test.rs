use small_calc::utils::validation::Validate;
use small_calc::{CalcConfig, CalcError, Dispatcher, Outcome, Repl, Session};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_original_keypad_walkthrough() {
    let mut session = Session::default();

    session.press_sequence("30");
    let selected = session.select_operation("/");
    assert_eq!(selected.message().as_deref(), Some("Operation: Division"));

    session.press('6');
    assert!(matches!(session.evaluate(), Outcome::Evaluated(v) if v == 5.0));
    assert_eq!(session.display(), "5.0");
}

#[test]
fn test_error_kinds_map_to_distinct_resets() {
    let mut session = Session::default();

    session.press_sequence("9/0");
    let outcome = session.evaluate();
    assert!(outcome.is_failure());
    assert_eq!(session.display(), "0");

    session.press_sequence("9");
    session.select_operation("%");
    session.press('1');
    let outcome = session.evaluate();
    assert!(matches!(
        outcome,
        Outcome::Failed {
            error: CalcError::InvalidOperation { .. },
            reset: false
        }
    ));
    assert_eq!(session.display(), "1");
}

#[test]
fn test_config_file_drives_session_display() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nprecision = 4").unwrap();

    let config = CalcConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let mut session = Session::with_display(
        Dispatcher::with_builtins(),
        config.default_text(),
        config.precision(),
    );
    session.press_sequence("1/3=");
    assert_eq!(session.display(), "0.3333");
}

#[test]
fn test_repl_script() {
    let script = "5*5=\n-5=\n:op %\n2=\nC\n:quit\n";
    let mut repl = Repl::new(Session::default(), Cursor::new(script), Vec::new());
    repl.run().unwrap();

    assert_eq!(repl.session().display(), "0");
    let output = String::from_utf8(repl.into_output()).unwrap();
    assert!(output.contains("[ 25.0 ]"));
    assert!(output.contains("[ 20.0 ]"));
    assert!(output.contains("Operation: Subtraction"));
    assert!(output.contains("Error: Operation '%' not found!"));
}
