//! EScript Eval - the object model and the machine that runs term trees.
//!
//! # Architecture
//!
//! - [`ObjectRef`]: prototype objects with fields, methods and a lexical
//!   owner link; unqualified calls walk the owner chain, calls with an
//!   explicit receiver look only at the receiver.
//! - [`Value`]: null, the three scalars, or an object. Scalars are boxed
//!   into method-carrying objects only when a method is dispatched on them.
//! - [`Callable`]: the closed set of things a method table can hold.
//! - [`Machine`]: a trampoline over an explicit, heap-resident frame chain.
//!   Every step does bounded work and either delivers a value to a frame,
//!   pushes a child frame, pops, or jumps to a stored exit frame, so user
//!   recursion depth never touches the host stack and execution can pause
//!   between any two steps.
//! - [`host`]: the root environment primitives and the in-language prelude.

mod callable;
mod clock;
mod errors;
mod frame;
pub mod host;
mod machine;
mod object;
mod print_handler;
mod scalar;
mod value;

pub use callable::{Callable, HostFn, LambdaDef, MethodDef, Primitive};
pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{EvalError, Lookup, RuntimeError};
pub use frame::{Frame, FrameRef};
pub use machine::{Machine, MachineConfig, Status};
pub use object::{Object, ObjectRef};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use scalar::{box_scalar, ScalarOp};
pub use value::{Scalar, Value};

use es_ir::TermRef;

/// Start running `program` against `root` on the system clock.
///
/// The returned machine does nothing until the host calls
/// [`Machine::tick`].
pub fn run(program: TermRef, root: ObjectRef) -> Machine {
    Machine::new(program, root)
}

#[cfg(test)]
mod tests;
