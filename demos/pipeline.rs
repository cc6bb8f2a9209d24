//! Pipeline Example
//!
//! Demonstrates a parse -> validate -> persist pipeline built from fallible
//! steps that return `Outcome`.
//!
//! Patterns covered:
//! - Chaining steps with and_then
//! - Converting error types with map_err
//! - Recovering with catch
//! - Combining independent outcomes
//! - Adding context to errors

use outcome::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum AppError {
    Parse(String),
    Validation(&'static str),
    Storage(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Parse(msg) => write!(f, "parse error: {}", msg),
            AppError::Validation(msg) => write!(f, "invalid: {}", msg),
            AppError::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
struct Reading {
    sensor: String,
    celsius: f64,
}

fn parse_input(line: &str) -> Outcome<Reading, AppError> {
    let Some((sensor, value)) = line.split_once('=') else {
        let msg = format!("expected name=value, got {:?}", line);
        return failure(AppError::Parse(msg));
    };
    Outcome::from_result(value.trim().parse::<f64>())
        .map_err(|e| AppError::Parse(e.to_string()))
        .map(|celsius| Reading {
            sensor: sensor.trim().to_string(),
            celsius,
        })
}

fn validate(reading: Reading) -> Outcome<Reading, AppError> {
    success(reading)
        .ensure(
            |r| !r.sensor.is_empty(),
            AppError::Validation("sensor name is empty"),
        )
        .ensure(
            |r| (-90.0..=60.0).contains(&r.celsius),
            AppError::Validation("temperature out of range"),
        )
}

fn persist(reading: Reading) -> Outcome<u64, AppError> {
    if reading.sensor == "readonly" {
        failure(AppError::Storage("table is read-only".to_string()))
    } else {
        success(reading.celsius.to_bits() % 10_000)
    }
}

// ==================== Sequential Steps ====================

/// Example 1: Steps run in order and stop at the first failure.
fn example_chaining() {
    println!("\n=== Example 1: Chaining ===");

    for line in ["kitchen=21.5", "{", "attic=140", "=3"] {
        let result = parse_input(line).and_then(validate).and_then(persist);
        let shown = match_outcome(
            result,
            |id| format!("stored as #{}", id),
            |e| format!("rejected ({})", e),
        );
        println!("  {:<14} -> {}", line, shown);
    }
}

// ==================== Recovery ====================

/// Example 2: A storage failure is recovered with a fallback id.
fn example_recovery() {
    println!("\n=== Example 2: Recovery ===");

    let result = parse_input("readonly=4.0")
        .and_then(validate)
        .and_then(persist)
        .catch(|e| match e {
            AppError::Storage(msg) => {
                println!("  storage failed ({}), using spool", msg);
                success(0)
            }
            other => failure(other),
        });

    println!("  result: {:?}", result);
}

// ==================== Combining ====================

/// Example 3: Two independent readings; the first failure wins.
fn example_combine() {
    println!("\n=== Example 3: Combine ===");

    let both = combine(parse_input("in=20"), parse_input("out=-4"));
    println!("  both ok: {:?}", both.map(|(a, b)| a.celsius - b.celsius));

    let first_bad = combine(parse_input("bad"), parse_input("worse"));
    println!("  both bad: {:?}", first_bad.map(|_| ()));
}

// ==================== Context ====================

/// Example 4: Errors carry a trail of what was being attempted.
fn example_context() {
    println!("\n=== Example 4: Context ===");

    let result = parse_input("porch=abc")
        .context("parsing sensor line 3")
        .add_context("importing batch 2024-06-01");

    if let Outcome::Failure(err) = result {
        println!("{}", err);
    }
}

fn main() {
    println!("Pipeline Examples");
    println!("=================");

    example_chaining();
    example_recovery();
    example_combine();
    example_context();

    println!("\n=== All examples completed successfully! ===");
}
