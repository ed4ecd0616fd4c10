use std::{fs, io::Cursor};

use smartcalc::{
    Outcome, Session,
    error::ErrorKind,
    get_result,
    repl::{HELP, Repl, Reply},
};
use walkdir::WalkDir;

#[test]
fn script_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        let mut output = Vec::new();
        Repl::new().run(Cursor::new(script), &mut output).expect("in-memory I/O cannot fail");
        let actual = String::from_utf8(output).expect("replies are UTF-8");

        assert_eq!(actual, expected, "transcript mismatch for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_value(src: &str, expected: i64) {
    let mut session = Session::new();
    let mut last = None;
    for line in src.lines() {
        last = Some(session.evaluate(line));
    }
    assert_eq!(last, Some(Outcome::Value(expected)), "script: {src}");
}

fn assert_failure(src: &str, kind: ErrorKind) {
    let mut session = Session::new();
    let mut last = None;
    for line in src.lines() {
        last = Some(session.evaluate(line));
    }
    match last {
        Some(Outcome::Failure(e)) => assert_eq!(e.kind(), kind, "script: {src}"),
        other => panic!("Script {src:?} was expected to fail with {kind:?}, got {other:?}"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("3 + 4 * 2", 11);
    assert_value("( 3 + 4 ) * 2", 14);
    assert_value("2 * 3 + 4 * 5", 26);
    assert_value("10 - 4 - 3", 3);
    assert_value("100 / 10 / 5", 2);
    assert_value("2 * ( 3 + ( 4 - 1 ) * 2 )", 18);
    assert_value("((2))", 2);
    assert_value("8 - 2 ^ 2 * 3", 12);
    assert_value("1 + 2 * 3 - 4", 3);
    assert_value("(8 - 2 ^ 2) * 3", 12);
}

#[test]
fn exponent_groups_from_the_left() {
    assert_value("2 ^ 3 ^ 2", 64);
    assert_value("2 ^ ( 3 ^ 2 )", 512);
}

#[test]
fn sign_runs_collapse() {
    assert_value("5 - - 3", 8);
    assert_value("5 --- 3", 2);
    assert_value("5 +-- 3", 8);
    assert_value("5 ---- 3", 8);
    assert_value("5 -+- 3", 8);
    assert_value("9 +++ 1", 10);
    assert_value("5 - + - 3", 8);
    assert_value("5 -  -  - 3", 2);
    assert_value("5 - -3", 8);
    assert_value("x = 5\nx - - 3", 8);
}

#[test]
fn signed_literals() {
    assert_value("-5", -5);
    assert_value("+5", 5);
    assert_value("-5 + 3", -2);
    assert_value("3 * -2", -6);
}

#[test]
fn integer_division_truncates() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
    assert_failure("7 / 0", ErrorKind::DivisionByZero);
}

#[test]
fn negative_exponents_truncate() {
    assert_value("2 ^ -1", 0);
    assert_value("1 ^ -5", 1);
    assert_value("-1 ^ -3", -1);
    assert_value("-1 ^ -4", 1);
    assert_value("0 ^ 0", 1);
    assert_failure("0 ^ -1", ErrorKind::DivisionByZero);
}

#[test]
fn variables_in_expressions() {
    assert_value("x = 5\nx + 2", 7);
    assert_value("a = 2\nb = 3\na * b ^ a", 18);
    assert_value("alpha = 10\n(alpha-4)/3", 2);
    assert_value("x = 1\ny = x\nx = 9\ny + 0", 1);
}

#[test]
fn space_less_expressions() {
    assert_value("3+4*2", 11);
    assert_value("(3+4)*2", 14);
    assert_value("10-2---3", 5);
    assert_value("n=4\nn*n+n", 20);
}

#[test]
fn overflow_is_reported() {
    assert_failure("9223372036854775807 + 1", ErrorKind::Overflow);
    assert_failure("-9223372036854775807 - 2", ErrorKind::Overflow);
    assert_failure("2 ^ 64", ErrorKind::Overflow);
    assert_failure("99999999999999999999", ErrorKind::LiteralTooLarge);
}

#[test]
fn invalid_expressions() {
    assert_failure("3 + ( 4", ErrorKind::InvalidExpression);
    assert_failure("3 + 4 )", ErrorKind::InvalidExpression);
    assert_failure(") 3 (", ErrorKind::InvalidExpression);
    assert_failure("2 ** 3", ErrorKind::InvalidExpression);
    assert_failure("8//2", ErrorKind::InvalidExpression);
    assert_failure("2^^3", ErrorKind::InvalidExpression);
}

#[test]
fn malformed_expressions() {
    assert_failure("3 +", ErrorKind::MalformedExpression);
    assert_failure("* 3", ErrorKind::MalformedExpression);
    assert_failure("3 4", ErrorKind::MalformedExpression);
    assert_failure("( )", ErrorKind::MalformedExpression);
    assert_failure("   ", ErrorKind::MalformedExpression);
}

#[test]
fn identifier_errors() {
    assert_failure("y + 1", ErrorKind::UnknownVariable);
    assert_failure("x1 + 1", ErrorKind::InvalidIdentifier);
    assert_failure("4*-3", ErrorKind::InvalidIdentifier);
}

#[test]
fn assignment_errors_leave_environment_untouched() {
    let mut session = Session::new();
    assert_eq!(session.evaluate("a = 1"), Outcome::Bound);

    for (line, kind) in [("a1 = 2", ErrorKind::InvalidIdentifier),
                         ("= 2", ErrorKind::InvalidIdentifier),
                         ("a = 2b", ErrorKind::InvalidAssignment),
                         ("a = 1 + 1", ErrorKind::InvalidAssignment),
                         ("a = = 2", ErrorKind::InvalidAssignment),
                         ("a = nope", ErrorKind::UnknownVariable),
                         ("a = 99999999999999999999", ErrorKind::LiteralTooLarge)]
    {
        match session.evaluate(line) {
            Outcome::Failure(e) => assert_eq!(e.kind(), kind, "line: {line}"),
            other => panic!("{line:?} should fail, got {other:?}"),
        }
    }

    assert_eq!(session.env().len(), 1);
    assert_eq!(session.env().get("a"), Some(1));
}

#[test]
fn query_returns_bound_value() {
    let mut session = Session::new();
    session.evaluate("total = 12");
    assert_eq!(session.evaluate("  total "), Outcome::Query(12));
    assert_eq!(session.evaluate("total + 0"), Outcome::Value(12));
}

#[test]
fn evaluation_is_idempotent() {
    let mut session = Session::new();
    session.evaluate("k = 3");
    let first = session.evaluate("k * (k + 1) - 2 ^ k");
    let second = session.evaluate("k * (k + 1) - 2 ^ k");
    assert_eq!(first, Outcome::Value(4));
    assert_eq!(first, second);
}

#[test]
fn commands_and_blank_lines() {
    let mut repl = Repl::new();
    assert_eq!(repl.handle_line(""), Reply::Silent);
    assert_eq!(repl.handle_line("   "), Reply::Silent);
    assert_eq!(repl.handle_line("/help"), Reply::Print(HELP.to_string()));
    assert_eq!(repl.handle_line("/quit"), Reply::Print("Unknown command".to_string()));
    assert_eq!(repl.handle_line("x = 2"), Reply::Silent);
    assert_eq!(repl.handle_line("x"), Reply::Print("2".to_string()));
    assert_eq!(repl.session().env().get("x"), Some(2));
    assert_eq!(repl.handle_line("/exit"), Reply::Exit("Bye!".to_string()));
}

#[test]
fn run_stops_at_exit() {
    assert_eq!(get_result("1 + 1\n/exit\n2 + 2"), ["2", "Bye!"]);
    assert_eq!(get_result("1 + 1\n\n2 + 2"), ["2", "4"]);
}
