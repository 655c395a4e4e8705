use std::fs;

use arithmo::{error::InterpreterError, interpreter::value::Value, run};
use walkdir::WalkDir;

/// Runs every case in `tests/cases/*.calc`.
///
/// Each non-blank line that does not start with `#` has the form
/// `expression => expected`, where `expected` is a number (with a decimal
/// point for real results) or `error: lex|parse|eval`.
#[test]
fn case_files_pass() {
    let mut count = 0;

    let is_case = |e: &walkdir::DirEntry| e.path().extension().is_some_and(|ext| ext == "calc");

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(is_case)
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let (source, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            check_case(source.trim(), expected.trim(), &format!("{path:?}:{}", i + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check_case(source: &str, expected: &str, location: &str) {
    let result = run(source);

    if let Some(stage) = expected.strip_prefix("error:") {
        let actual = match &result {
            Err(InterpreterError::Lex(_)) => "lex",
            Err(InterpreterError::Parse(_)) => "parse",
            Err(InterpreterError::Eval(_)) => "eval",
            Ok(value) => panic!("{location}: {source:?} gave {value}, expected an error"),
        };
        assert_eq!(actual, stage.trim(), "{location}: {source:?} failed in the wrong stage");
        return;
    }

    let expected_value = if expected.contains('.') {
        Value::Real(expected.parse().unwrap_or_else(|e| panic!("{location}: {e}")))
    } else {
        Value::Integer(expected.parse().unwrap_or_else(|e| panic!("{location}: {e}")))
    };

    match result {
        Ok(value) => assert_eq!(value, expected_value, "{location}: {source:?}"),
        Err(e) => panic!("{location}: {source:?} failed: {e}"),
    }
}
