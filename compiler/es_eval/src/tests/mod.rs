//! End-to-end tests: source text through the prelude and the machine.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]


use std::rc::Rc;

use crate::host::{load, root_environment};
use crate::{buffer_handler, EvalError, Machine, MachineConfig, ManualClock, SharedPrintHandler, Status};

struct Session {
    machine: Machine,
    output: SharedPrintHandler,
    clock: ManualClock,
}

impl Session {
    fn output(&self) -> String {
        self.output.get_output()
    }
}

fn start_with(source: &str, config: MachineConfig) -> Session {
    let output = buffer_handler();
    let clock = ManualClock::new();
    let program = load(source, true).unwrap();
    let root = root_environment(output.clone());
    let machine = Machine::with_config(program, root, config, Rc::new(clock.clone()));
    Session {
        machine,
        output,
        clock,
    }
}

fn start(source: &str) -> Session {
    start_with(source, MachineConfig::default())
}

/// Run to completion and return everything printed.
fn run(source: &str) -> String {
    let mut session = start(source);
    let status = session.machine.run_to_end(1_000);
    if let Some(error) = session.machine.error() {
        panic!("unexpected runtime error: {error}");
    }
    assert_eq!(status, Status::Finished);
    session.output()
}

fn run_err_with(source: &str, config: MachineConfig) -> EvalError {
    let mut session = start_with(source, config);
    assert_eq!(session.machine.run_to_end(1_000), Status::Failed);
    session.machine.take_error().unwrap()
}

fn run_err(source: &str) -> EvalError {
    run_err_with(source, MachineConfig::default())
}
