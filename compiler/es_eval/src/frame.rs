//! Frames: one suspended evaluation of one term.
//!
//! A frame links to its `caller` (where control resumes once the frame
//! delivers its value) and to its `exit` (where `^` sends a value). Both
//! point at older frames, so the links form a tree rooted at the program's
//! first frame and never a cycle.
//!
//! Terms carry no evaluation state; everything a term accumulates between
//! its steps lives in the frame's [`FrameState`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use es_ir::TermRef;
use smallvec::SmallVec;

use crate::{ObjectRef, Value};

pub type FrameRef = Rc<Frame>;

/// Where the next value delivered to a frame goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Receiver,
    /// Appended to the argument list.
    Arg,
    Value,
    /// Discarded, but noted as delivered.
    Ignore,
}

#[derive(Default)]
pub(crate) struct FrameState {
    pub recipient: Option<Slot>,
    pub receiver: Option<Value>,
    pub args: SmallVec<[Value; 4]>,
    pub value: Option<Value>,
    pub object: Option<ObjectRef>,
    pub ignored: bool,
}

pub struct Frame {
    context: ObjectRef,
    term: TermRef,
    caller: Option<FrameRef>,
    exit: Option<FrameRef>,
    pub(crate) state: RefCell<FrameState>,
}

impl Frame {
    pub(crate) fn new(
        context: ObjectRef,
        term: TermRef,
        caller: Option<FrameRef>,
        exit: Option<FrameRef>,
    ) -> Self {
        Frame {
            context,
            term,
            caller,
            exit,
            state: RefCell::new(FrameState::default()),
        }
    }

    /// The object this frame's term executes against.
    pub fn context(&self) -> &ObjectRef {
        &self.context
    }

    pub fn term(&self) -> &TermRef {
        &self.term
    }

    pub fn caller(&self) -> Option<&FrameRef> {
        self.caller.as_ref()
    }

    /// Target of an explicit return from this frame.
    pub fn exit(&self) -> Option<&FrameRef> {
        self.exit.as_ref()
    }

    /// Store a delivered value according to the current recipient slot.
    /// Without a recipient the value is dropped.
    pub(crate) fn receive(&self, value: Value) {
        let mut state = self.state.borrow_mut();
        match state.recipient {
            Some(Slot::Receiver) => state.receiver = Some(value),
            Some(Slot::Arg) => state.args.push(value),
            Some(Slot::Value) => state.value = Some(value),
            Some(Slot::Ignore) => state.ignored = true,
            None => {}
        }
    }

    pub(crate) fn receive_into(&self, slot: Slot) {
        self.state.borrow_mut().recipient = Some(slot);
    }
}

impl Drop for Frame {
    /// Unlink the caller chain iteratively; a deep user recursion abandoned
    /// by an error or a cancel would otherwise drop recursively.
    fn drop(&mut self) {
        let mut next = self.caller.take();
        while let Some(frame) = next {
            next = match Rc::try_unwrap(frame) {
                Ok(mut inner) => inner.caller.take(),
                Err(_) => None,
            };
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("term", &self.term.kind_name())
            .field("has_caller", &self.caller.is_some())
            .field("has_exit", &self.exit.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_ir::{Literal, Term};

    fn frame(caller: Option<FrameRef>) -> FrameRef {
        let term = Rc::new(Term::Literal(Literal::number(1.0)));
        Rc::new(Frame::new(ObjectRef::root(), term, caller, None))
    }

    #[test]
    fn receive_follows_recipient() {
        let f = frame(None);
        f.receive(Value::Number(1.0));
        assert!(f.state.borrow().value.is_none());

        f.receive_into(Slot::Arg);
        f.receive(Value::Number(1.0));
        f.receive(Value::Number(2.0));
        assert_eq!(f.state.borrow().args.len(), 2);

        f.receive_into(Slot::Value);
        f.receive(Value::Bool(true));
        assert_eq!(f.state.borrow().value, Some(Value::Bool(true)));

        f.receive_into(Slot::Ignore);
        f.receive(Value::Null);
        assert!(f.state.borrow().ignored);
    }

    #[test]
    fn dropping_a_long_chain_does_not_recurse() {
        let mut top = frame(None);
        for _ in 0..200_000 {
            top = frame(Some(top));
        }
        drop(top);
    }
}
