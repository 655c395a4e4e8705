use std::thread;

use arithmo::{
    ast::{Position, UnaryOperator},
    config::Config,
    error::{EvalError, EvalErrorKind, InterpreterError},
    interpreter::{
        evaluator::{core::evaluate, unary::eval_unary},
        lexer::tokenize,
        parser::core::parse,
        value::Value,
    },
    run, run_with_config,
};

fn eval_error_kind(source: &str) -> EvalErrorKind {
    match run(source) {
        Err(InterpreterError::Eval(EvalError { kind, .. })) => kind,
        other => panic!("{source:?} should fail during evaluation, got {other:?}"),
    }
}

#[test]
fn precedence() {
    assert_eq!(run("2 + 3 * 4").unwrap(), Value::Integer(14));
    assert_eq!(run("(2 + 3) * 4").unwrap(), Value::Integer(20));
    assert_eq!(run("10 - 4 - 3").unwrap(), Value::Integer(3));
    assert_eq!(run("2 * 3 ^ 2").unwrap(), Value::Integer(18));
}

#[test]
fn power_is_right_associative() {
    assert_eq!(run("2 ^ 3 ^ 2").unwrap(), Value::Integer(512));
    assert_eq!(run("(2 ^ 3) ^ 2").unwrap(), Value::Integer(64));
}

#[test]
fn unary_minus_applies_after_power() {
    assert_eq!(run("-2 ^ 2").unwrap(), Value::Integer(-4));
    assert_eq!(run("(-2) ^ 2").unwrap(), Value::Integer(4));
    assert_eq!(run("+4").unwrap(), Value::Integer(4));
    assert_eq!(run("--4").unwrap(), Value::Integer(4));
}

#[test]
fn division_is_exact_when_possible() {
    assert_eq!(run("8 / 2").unwrap(), Value::Integer(4));
    assert_eq!(run("-6 / 3").unwrap(), Value::Integer(-2));
    assert_eq!(run("7 / 2").unwrap(), Value::Real(3.5));
    assert_eq!(run("1 / 3").unwrap(), Value::Real(1.0 / 3.0));
    assert_eq!(run("9.0 / 3").unwrap(), Value::Real(3.0));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_error_kind("5 / 0"), EvalErrorKind::DivisionByZero);
    assert_eq!(eval_error_kind("5 / 0.0"), EvalErrorKind::DivisionByZero);
    assert_eq!(eval_error_kind("5.5 / (2 - 2)"), EvalErrorKind::DivisionByZero);
}

#[test]
fn division_by_zero_points_at_the_operator() {
    let err = run("1 + 2 / (3 - 3)").unwrap_err();
    assert_eq!(err,
               InterpreterError::Eval(EvalError { kind:     EvalErrorKind::DivisionByZero,
                                                  position: Position::new(6, 1, 7), }));
    assert_eq!(err.to_string(), "Error at line 1, column 7: Division by zero.");
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_eq!(run("1 + 0.5").unwrap(), Value::Real(1.5));
    assert_eq!(run("1.5 * 2").unwrap(), Value::Real(3.0));
    assert_eq!(run("2 * 3").unwrap(), Value::Integer(6));
    assert_eq!(run("7 - 10").unwrap(), Value::Integer(-3));
}

#[test]
fn integer_overflow_promotes_to_real() {
    assert_eq!(run("9223372036854775807 + 1").unwrap(),
               Value::Real(9_223_372_036_854_775_808.0));
    assert_eq!(run("-(-9223372036854775807 - 1)").unwrap(),
               Value::Real(9_223_372_036_854_775_808.0));
    assert_eq!(run("2 ^ 62").unwrap(), Value::Integer(4_611_686_018_427_387_904));
    assert_eq!(run("2 ^ 63").unwrap(), Value::Real(9_223_372_036_854_775_808.0));
}

#[test]
fn real_overflow_is_an_error() {
    assert_eq!(eval_error_kind("10.0 ^ 400"), EvalErrorKind::Overflow);
    assert_eq!(eval_error_kind(&format!("1{} * 1", "0".repeat(400))), EvalErrorKind::Overflow);
}

#[test]
fn powers() {
    assert_eq!(run("2 ^ 10").unwrap(), Value::Integer(1024));
    assert_eq!(run("2 ^ -2").unwrap(), Value::Real(0.25));
    assert_eq!(run("4 ^ 0.5").unwrap(), Value::Real(2.0));
    assert_eq!(run("0 ^ 0").unwrap(), Value::Integer(1));
    assert_eq!(run("(-3) ^ 3").unwrap(), Value::Integer(-27));
}

#[test]
fn huge_exponents_on_unit_bases_stay_integers() {
    assert_eq!(run("1 ^ 5000000000").unwrap(), Value::Integer(1));
    assert_eq!(run("(-1) ^ 5000000000").unwrap(), Value::Integer(1));
    assert_eq!(run("(-1) ^ 5000000001").unwrap(), Value::Integer(-1));
    assert_eq!(run("0 ^ 5000000000").unwrap(), Value::Integer(0));
    assert_eq!(run("1 ^ -1").unwrap(), Value::Real(1.0));
    assert_eq!(eval_error_kind("2 ^ 5000000000"), EvalErrorKind::Overflow);
}

#[test]
fn zero_to_a_negative_power() {
    assert_eq!(eval_error_kind("0 ^ -1"), EvalErrorKind::DivisionByZero);
    assert_eq!(eval_error_kind("0.0 ^ -2.5"), EvalErrorKind::DivisionByZero);
}

#[test]
fn fractional_power_of_negative_base_is_undefined() {
    assert_eq!(eval_error_kind("(-8) ^ 0.5"), EvalErrorKind::Undefined);
}

#[test]
fn unary_operators_never_fail() {
    assert_eq!(eval_unary(UnaryOperator::Negate, Value::Integer(i64::MIN)),
               Value::Real(9_223_372_036_854_775_808.0));
    assert_eq!(eval_unary(UnaryOperator::Negate, Value::Real(-0.5)), Value::Real(0.5));
    assert_eq!(eval_unary(UnaryOperator::Plus, Value::Integer(7)), Value::Integer(7));
}

#[test]
fn whitespace_does_not_matter() {
    assert_eq!(run("2+3").unwrap(), run(" 2 + 3 ").unwrap());
    assert_eq!(run("(1+2)*3").unwrap(), run("( 1 + 2 )\n* 3").unwrap());
}

#[test]
fn evaluation_is_repeatable() {
    let expr = parse(tokenize("(1.5 + 2) ^ -3 / 4 - 7 / 2").unwrap()).unwrap();
    let first = evaluate(&expr).unwrap();
    let second = evaluate(&expr).unwrap();
    assert_eq!(first, second);
    assert_eq!(run("(1.5 + 2) ^ -3 / 4 - 7 / 2").unwrap(), first);
}

#[test]
fn stages_report_their_own_errors() {
    assert!(matches!(run("2 $ 3"), Err(InterpreterError::Lex(_))));
    assert!(matches!(run("2 3"), Err(InterpreterError::Parse(_))));
    assert!(matches!(run(""), Err(InterpreterError::Parse(_))));
    assert!(matches!(run("1 / 0"), Err(InterpreterError::Eval(_))));
}

#[test]
fn error_spans_cover_the_offending_input() {
    assert_eq!(run("2 $ 3").unwrap_err().span(), 2..3);
    assert_eq!(run("1 + 22 33").unwrap_err().span(), 7..9);
    assert_eq!(run("(1").unwrap_err().span(), 2..2);
    assert_eq!(run("4 / 0").unwrap_err().span(), 2..3);
}

#[test]
fn configured_limits_apply_to_run() {
    let config = Config::default().with_max_depth(2);
    assert_eq!(run_with_config("((1 + 2))", &config).unwrap(), Value::Integer(3));
    assert_eq!(run_with_config("1 + 2 + 3 + 4", &config).unwrap(), Value::Integer(10));
    assert!(run_with_config("(((1)))", &config).is_err());

    let config = Config::default().with_max_height(2);
    assert_eq!(run_with_config("1 + 2", &config).unwrap(), Value::Integer(3));
    assert!(matches!(run_with_config("1 + 2 + 3", &config),
                     Err(InterpreterError::Parse(_))));
}

#[test]
fn long_flat_chains_evaluate() {
    assert_eq!(run(&vec!["1"; 300].join(" + ")).unwrap(), Value::Integer(300));
    assert_eq!(run(&vec!["1"; 1000].join(" - ")).unwrap(), Value::Integer(-998));

    let product = run(&vec!["2"; 260].join(" * ")).unwrap();
    assert_eq!(product, Value::Real(2f64.powi(260)));
}

#[test]
fn independent_runs_on_many_threads() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    thread::spawn(move || run(&format!("{i} * ({i} + 1) / 2")))
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = i64::try_from(i).unwrap();
        let value = handle.join().unwrap().unwrap();
        let expected = i * (i + 1) / 2;
        assert_eq!(value, Value::Integer(expected));
    }
}

#[test]
fn values_display_their_kind() {
    assert_eq!(Value::Integer(-4).to_string(), "-4");
    assert_eq!(Value::Real(4.0).to_string(), "4.0");
    assert_eq!(Value::Real(3.5).to_string(), "3.5");
}
