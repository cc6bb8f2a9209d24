#![cfg(feature = "try_trait")]
#![feature(try_trait_v2)]

use outcome::{failure, success, ContextError, Outcome};

#[test]
fn test_question_mark_short_circuits() {
    fn halve(n: i32) -> Outcome<i32, String> {
        if n % 2 == 0 {
            success(n / 2)
        } else {
            failure(format!("{} is odd", n))
        }
    }

    fn quarter(n: i32) -> Outcome<i32, String> {
        let half = halve(n)?;
        halve(half)
    }

    assert_eq!(quarter(12), Outcome::Success(3));
    assert_eq!(quarter(6), Outcome::Failure("3 is odd".to_string()));
}

#[test]
fn test_question_mark_on_std_result() {
    fn parse(s: &str) -> Outcome<i32, String> {
        let n: i32 = s.parse().map_err(|_| format!("not a number: {}", s))?;
        success(n)
    }

    assert_eq!(parse("8"), Outcome::Success(8));
    assert_eq!(parse("x"), Outcome::Failure("not a number: x".to_string()));
}

#[test]
fn test_question_mark_converts_error_type() {
    fn load() -> Outcome<u16, &'static str> {
        failure("missing")
    }

    fn start() -> Outcome<u16, ContextError<&'static str>> {
        let port = load()?;
        success(port)
    }

    assert_eq!(start(), Outcome::Failure(ContextError::new("missing")));
}
