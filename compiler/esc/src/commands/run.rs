//! The `run` command: load a program and drive the scheduler in real time.

use std::rc::Rc;
use std::time::{Duration, Instant};

use es_diagnostic::Diagnostic;
use es_eval::host::{load, root_environment};
use es_eval::{Machine, MachineConfig, SharedPrintHandler, Status, SystemClock};
use tracing::{debug, info};

use super::{read_file, report_and_exit};
use crate::problem::{render_eval_error, render_parse_error};

/// Options accepted by `es run`.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub steps_per_tick: usize,
    /// Ticks per second. Zero ticks back to back without sleeping.
    pub tick_rate: f64,
    pub strict_arity: bool,
    pub prelude: bool,
}

impl RunOptions {
    pub const DEFAULT_TICK_RATE: f64 = 30.0;

    pub fn machine_config(&self) -> MachineConfig {
        MachineConfig {
            steps_per_tick: self.steps_per_tick,
            strict_arity: self.strict_arity,
        }
    }

    /// Wall time between the starts of consecutive ticks.
    pub fn tick_interval(&self) -> Duration {
        if self.tick_rate > 0.0 {
            Duration::try_from_secs_f64(self.tick_rate.recip()).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            steps_per_tick: MachineConfig::DEFAULT_STEPS_PER_TICK,
            tick_rate: Self::DEFAULT_TICK_RATE,
            strict_arity: false,
            prelude: true,
        }
    }
}

/// Parse the flags following `es run <file>`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--steps-per-tick=") {
            options.steps_per_tick = value
                .parse()
                .map_err(|_| format!("invalid step count '{value}'"))?;
        } else if let Some(value) = arg.strip_prefix("--tick-rate=") {
            options.tick_rate = value
                .parse::<f64>()
                .ok()
                .filter(|rate| rate.is_finite() && *rate >= 0.0)
                .ok_or_else(|| format!("invalid tick rate '{value}'"))?;
        } else if arg == "--strict-arity" {
            options.strict_arity = true;
        } else if arg == "--no-prelude" {
            options.prelude = false;
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}

/// Tick `machine` every `interval` until it finishes or fails, sleeping
/// through waits.
pub fn drive(machine: &mut Machine, interval: Duration) -> Status {
    let mut ticks = 0u64;
    loop {
        let started = Instant::now();
        let status = machine.tick();
        ticks += 1;
        let pause = match status {
            Status::Finished | Status::Failed => {
                debug!(ticks, steps = machine.steps_executed(), ?status, "stopped");
                return status;
            }
            Status::Running => interval.saturating_sub(started.elapsed()),
            Status::Suspended => machine.remaining_wait().unwrap_or(interval),
        };
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}

/// Load `source` and run it to completion, printing through `print`.
pub fn execute(
    source: &str,
    options: &RunOptions,
    print: SharedPrintHandler,
) -> Result<(), Diagnostic> {
    let program = load(source, options.prelude).map_err(|err| render_parse_error(&err))?;
    let root = root_environment(print);
    let mut machine = Machine::with_config(
        program,
        root,
        options.machine_config(),
        Rc::new(SystemClock::new()),
    );
    info!(?options, "running");
    drive(&mut machine, options.tick_interval());
    match machine.take_error() {
        Some(err) => Err(render_eval_error(&err)),
        None => Ok(()),
    }
}

/// Run an EScript file, exiting with status 1 on any error.
pub fn run_file(path: &str, options: &RunOptions) {
    let content = read_file(path);
    if let Err(diagnostic) = execute(&content, options, es_eval::stdout_handler()) {
        report_and_exit(path, &content, &diagnostic);
    }
}
