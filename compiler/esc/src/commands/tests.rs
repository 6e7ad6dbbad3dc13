#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::time::Duration;

use es_diagnostic::ErrorCode;
use es_eval::buffer_handler;
use pretty_assertions::assert_eq;

use super::*;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn fast() -> RunOptions {
    RunOptions {
        tick_rate: 0.0,
        ..RunOptions::default()
    }
}

#[test]
fn test_default_options() {
    let options = parse_run_options(&[]).unwrap();
    assert_eq!(options, RunOptions::default());
    assert_eq!(options.steps_per_tick, 10_000);
    assert!(options.prelude);
}

#[test]
fn test_all_flags() {
    let options = parse_run_options(&args(&[
        "--steps-per-tick=50",
        "--tick-rate=60",
        "--strict-arity",
        "--no-prelude",
    ]))
    .unwrap();
    assert_eq!(options.steps_per_tick, 50);
    assert!((options.tick_rate - 60.0).abs() < f64::EPSILON);
    assert!(options.strict_arity);
    assert!(!options.prelude);
    assert!(options.machine_config().strict_arity);
}

#[test]
fn test_bad_flags() {
    assert!(parse_run_options(&args(&["--steps-per-tick=many"])).is_err());
    assert!(parse_run_options(&args(&["--tick-rate=-1"])).is_err());
    assert!(parse_run_options(&args(&["--tick-rate=inf"])).is_err());
    assert_eq!(
        parse_run_options(&args(&["--fast"])).unwrap_err(),
        "unknown option '--fast'"
    );
}

#[test]
fn test_tick_interval() {
    assert_eq!(fast().tick_interval(), Duration::ZERO);
    let options = RunOptions {
        tick_rate: 4.0,
        ..RunOptions::default()
    };
    assert_eq!(options.tick_interval(), Duration::from_millis(250));
}

#[test]
fn test_execute_prints_through_handler() {
    let output = buffer_handler();
    execute("print(6 * 7)", &fast(), output.clone()).unwrap();
    assert_eq!(output.get_output(), "42\n");
}

#[test]
fn test_execute_short_wait() {
    let output = buffer_handler();
    execute("print(1); wait(0.01); print(2)", &fast(), output.clone()).unwrap();
    assert_eq!(output.get_output(), "1\n2\n");
}

#[test]
fn test_execute_reports_parse_error() {
    let diag = execute("f(x) )", &fast(), buffer_handler()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E1001);
}

#[test]
fn test_execute_reports_runtime_error() {
    let output = buffer_handler();
    let diag = execute("print(1); nope", &fast(), output.clone()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(output.get_output(), "1\n");
}

#[test]
fn test_execute_without_prelude() {
    let options = RunOptions {
        prelude: false,
        ..fast()
    };
    let output = buffer_handler();
    execute("basicPrint(1)", &options, output.clone()).unwrap();
    assert_eq!(output.get_output(), "1\n");
    assert!(execute("print(1)", &options, buffer_handler()).is_err());
}
