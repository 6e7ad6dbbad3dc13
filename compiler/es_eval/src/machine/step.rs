//! One step of one frame, per term kind.
//!
//! A frame is stepped again each time a child delivers a value, so a step
//! first checks which of its parts already arrived and then either pushes
//! the next child or finishes: pop, then deliver the result to the caller.

use std::rc::Rc;

use es_ir::{Name, Term, TermRef};
use tracing::{debug, trace};

use super::Machine;
use crate::frame::Slot;
use crate::{Callable, FrameRef, LambdaDef, Lookup, MethodDef, ObjectRef, RuntimeError, Value};

impl Machine {
    pub(super) fn step(&mut self, frame: &FrameRef) -> Result<(), RuntimeError> {
        match &**frame.term() {
            Term::Literal(literal) => {
                self.pop();
                self.receive(Value::from_literal(literal));
            }

            Term::SelfCall { method, args } => {
                if self.evaluate_next_arg(frame, args) {
                    return Ok(());
                }
                let args = frame.state.borrow().args.clone();
                self.pop();
                let callable = frame.context().lookup_lexical(method).ok_or_else(|| {
                    RuntimeError::MethodNotFound {
                        name: method.clone(),
                        lookup: Lookup::Lexical,
                    }
                })?;
                self.invoke(method, callable, args)?;
            }

            Term::Call {
                receiver,
                method,
                args,
            } => {
                let target = frame.state.borrow().receiver.clone();
                let Some(target) = target else {
                    frame.receive_into(Slot::Receiver);
                    self.evaluate_next(frame, receiver);
                    return Ok(());
                };
                if self.evaluate_next_arg(frame, args) {
                    return Ok(());
                }
                let args = frame.state.borrow().args.clone();
                self.pop();
                let callable = Self::lookup_method(&target, method)?;
                self.invoke(method, callable, args)?;
            }

            Term::PropertyDefine { name, value, .. } => {
                let Some(value) = self.evaluate_value(frame, value) else {
                    return Ok(());
                };
                self.pop();
                debug!(%name, "define property");
                frame.context().define_property(name.clone(), value.clone());
                self.receive(value);
            }

            Term::MethodDefine {
                name, params, body, ..
            } => {
                debug!(%name, arity = params.len(), "define method");
                let context = frame.context().clone();
                let method = MethodDef {
                    name: name.clone(),
                    receiver: context.clone(),
                    params: params.clone(),
                    body: Rc::clone(body),
                };
                context.define_method(name.clone(), Callable::Method(Rc::new(method)));
                self.pop();
                self.receive(Value::Object(context));
            }

            Term::ObjectLiteral(body) => {
                let built = {
                    let state = frame.state.borrow();
                    state.object.clone().filter(|_| state.ignored)
                };
                if let Some(object) = built {
                    self.pop();
                    self.receive(Value::Object(object));
                } else {
                    let object = frame.context().child();
                    frame.state.borrow_mut().object = Some(object.clone());
                    frame.receive_into(Slot::Ignore);
                    self.push(object, Rc::clone(body), None);
                }
            }

            Term::Delegate(source) => {
                let Some(value) = self.evaluate_value(frame, source) else {
                    return Ok(());
                };
                let context = frame.context().clone();
                context.mix_in(&value.boxed());
                self.pop();
                self.receive(Value::Object(context));
            }

            Term::Lambda { params, body } => {
                let lambda = LambdaDef {
                    receiver: frame.context().clone(),
                    params: params.clone(),
                    body: Rc::clone(body),
                    exit: frame.exit().cloned(),
                };
                let object = ObjectRef::root();
                object.define_method(Name::from("call"), Callable::Lambda(Rc::new(lambda)));
                self.pop();
                self.receive(Value::Object(object));
            }

            Term::Sequence { first, rest } => {
                if self.evaluate_value(frame, first).is_none() {
                    return Ok(());
                }
                self.pop();
                self.push(frame.context().clone(), Rc::clone(rest), None);
            }

            Term::Tuple(items) => {
                self.pop();
                match items.as_slice() {
                    [] => self.receive(Value::Null),
                    [item] => self.push(frame.context().clone(), Rc::clone(item), None),
                    _ => return Err(RuntimeError::InvalidTupleValue { len: items.len() }),
                }
            }

            Term::Return(value) => {
                let Some(value) = self.evaluate_value(frame, value) else {
                    return Ok(());
                };
                trace!("return");
                self.jump(frame.exit().cloned());
                self.receive(value);
            }
        }
        Ok(())
    }

    /// The value delivered to `frame`'s value slot, or `None` after
    /// pushing `term` to produce it.
    fn evaluate_value(&mut self, frame: &FrameRef, term: &TermRef) -> Option<Value> {
        let delivered = frame.state.borrow().value.clone();
        if delivered.is_none() {
            frame.receive_into(Slot::Value);
            self.evaluate_next(frame, term);
        }
        delivered
    }

    /// Push the first argument not yet delivered. Returns `false` once all
    /// of them are in.
    fn evaluate_next_arg(&mut self, frame: &FrameRef, args: &[TermRef]) -> bool {
        let delivered = frame.state.borrow().args.len();
        let Some(next) = args.get(delivered) else {
            return false;
        };
        frame.receive_into(Slot::Arg);
        self.evaluate_next(frame, next);
        true
    }

    fn evaluate_next(&mut self, frame: &FrameRef, term: &TermRef) {
        self.push(frame.context().clone(), Rc::clone(term), None);
    }
}
