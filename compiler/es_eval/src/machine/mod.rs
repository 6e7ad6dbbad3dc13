//! The scheduler: a trampoline over an explicit frame chain.
//!
//! The host creates a [`Machine`] for a program and calls [`Machine::tick`]
//! periodically. Each tick steps the current frame at most
//! `steps_per_tick` times, returning early when the program finishes,
//! fails, or a primitive asks to wait. While a wait deadline lies in the
//! future, ticks do nothing.
//!
//! # Frame linkage
//!
//! Pushing a frame makes the current frame its caller. Method invocation
//! gives the new frame an explicit exit (the frame waiting for the call's
//! result); lambda invocation gives it the exit captured when the lambda
//! was created. Every other frame inherits its exit from the frame that
//! most recently popped (the *tail*), or from the current frame when
//! nothing popped since the last delivery, so chains of intermediate
//! frames forward the real exit unchanged.

mod invoke;
mod step;

use std::rc::Rc;
use std::time::Duration;

use es_ir::TermRef;
use tracing::{debug, trace, warn};

use crate::{Clock, EvalError, Frame, FrameRef, ObjectRef, SystemClock, Value};

/// Scheduler settings, fixed when the machine is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineConfig {
    /// Ceiling on steps per [`Machine::tick`]. Zero is treated as one.
    pub steps_per_tick: usize,
    /// Reject method and lambda calls whose argument count differs from
    /// the parameter count. Off: missing parameters read as null and extra
    /// arguments are ignored.
    pub strict_arity: bool,
}

impl MachineConfig {
    pub const DEFAULT_STEPS_PER_TICK: usize = 10_000;
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            steps_per_tick: Self::DEFAULT_STEPS_PER_TICK,
            strict_arity: false,
        }
    }
}

/// What the host should do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Work remains; tick again.
    Running,
    /// Waiting for the clock to reach [`Machine::resume_at`].
    Suspended,
    Finished,
    /// A runtime error stopped the program; see [`Machine::error`].
    Failed,
}

pub struct Machine {
    frame: Option<FrameRef>,
    /// Most recently popped frame, until the next push or delivery.
    tail: Option<FrameRef>,
    /// Set by `wait`; ends the current tick.
    yielding: bool,
    wait_until: Option<Duration>,
    clock: Rc<dyn Clock>,
    config: MachineConfig,
    steps: u64,
    error: Option<EvalError>,
}

impl Machine {
    /// A machine on the system clock with the default configuration.
    pub fn new(program: TermRef, root: ObjectRef) -> Self {
        Self::with_config(
            program,
            root,
            MachineConfig::default(),
            Rc::new(SystemClock::new()),
        )
    }

    pub fn with_config(
        program: TermRef,
        root: ObjectRef,
        config: MachineConfig,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Machine {
            frame: Some(Rc::new(Frame::new(root, program, None, None))),
            tail: None,
            yielding: false,
            wait_until: None,
            clock,
            config,
            steps: 0,
            error: None,
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        if self.error.is_some() {
            Status::Failed
        } else if self.frame.is_none() {
            Status::Finished
        } else if self
            .wait_until
            .is_some_and(|deadline| self.clock.now() < deadline)
        {
            Status::Suspended
        } else {
            Status::Running
        }
    }

    /// Advance the program by up to `steps_per_tick` steps.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn tick(&mut self) -> Status {
        if self.error.is_some() {
            return Status::Failed;
        }
        if let Some(deadline) = self.wait_until {
            if self.clock.now() < deadline {
                return Status::Suspended;
            }
            debug!("resuming");
            self.wait_until = None;
        }
        self.yielding = false;

        let limit = self.config.steps_per_tick.max(1);
        let mut executed = 0usize;
        while executed < limit {
            let Some(frame) = self.frame.clone() else {
                break;
            };
            executed += 1;
            if let Err(error) = self.step(&frame) {
                debug!(%error, "runtime error");
                self.error = Some(EvalError::new(error, Some(frame.term().to_string())));
                self.frame = None;
                self.tail = None;
                break;
            }
            if self.yielding {
                break;
            }
        }
        self.steps = self
            .steps
            .saturating_add(u64::try_from(executed).unwrap_or(u64::MAX));

        if executed == limit && self.frame.is_some() && !self.yielding {
            warn!(limit, "tick reached its step ceiling");
        }
        debug!(executed, "tick");
        self.status()
    }

    /// Tick until the program stops running or `max_ticks` ticks pass.
    /// Never sleeps: a machine waiting on the clock returns `Suspended`.
    pub fn run_to_end(&mut self, max_ticks: usize) -> Status {
        for _ in 0..max_ticks {
            let status = self.tick();
            if status != Status::Running {
                return status;
            }
        }
        self.status()
    }

    pub fn error(&self) -> Option<&EvalError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<EvalError> {
        self.error.take()
    }

    /// Clock reading at which a pending wait ends.
    pub fn resume_at(&self) -> Option<Duration> {
        self.wait_until
    }

    /// Time remaining until a pending wait ends, by this machine's clock.
    pub fn remaining_wait(&self) -> Option<Duration> {
        self.wait_until
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Abandon all in-flight evaluation.
    pub fn cancel(&mut self) {
        debug!("cancelled");
        self.frame = None;
        self.tail = None;
        self.yielding = false;
        self.wait_until = None;
    }

    pub fn steps_executed(&self) -> u64 {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.status() == Status::Finished
    }

    /// Suspend for `seconds` of clock time, ending the current tick.
    /// Negative and NaN durations mean zero.
    pub fn wait(&mut self, seconds: f64) {
        let delay = Duration::try_from_secs_f64(seconds.max(0.0)).unwrap_or(Duration::MAX);
        let deadline = self.clock.now().checked_add(delay).unwrap_or(Duration::MAX);
        debug!(seconds, "suspending");
        self.wait_until = Some(deadline);
        self.yielding = true;
    }

    /// Push a frame evaluating `term` against `context`. Without an
    /// explicit exit the frame inherits one from the tail or current frame.
    fn push(&mut self, context: ObjectRef, term: TermRef, exit: Option<FrameRef>) {
        let exit = exit.or_else(|| {
            self.tail
                .as_ref()
                .or(self.frame.as_ref())
                .and_then(|frame| frame.exit().cloned())
        });
        trace!(term = term.kind_name(), "push");
        let frame = Frame::new(context, term, self.frame.take(), exit);
        self.frame = Some(Rc::new(frame));
        self.tail = None;
    }

    /// Finish the current frame; control goes back to its caller.
    fn pop(&mut self) {
        if let Some(frame) = self.frame.take() {
            trace!(term = frame.term().kind_name(), "pop");
            self.frame = frame.caller().cloned();
            self.tail = Some(frame);
        }
    }

    /// Continue at `target`, abandoning every frame in between.
    fn jump(&mut self, target: Option<FrameRef>) {
        trace!(to_end = target.is_none(), "jump");
        self.frame = target;
    }

    /// Deliver a value to the current frame. With no frame left the value
    /// is the program's result and is dropped.
    fn receive(&mut self, value: Value) {
        let Some(frame) = self.frame.as_ref() else {
            return;
        };
        self.tail = None;
        frame.receive(value);
    }
}
