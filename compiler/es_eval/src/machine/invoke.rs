//! Method dispatch and invocation.

use es_ir::Name;
use smallvec::SmallVec;
use tracing::trace;

use super::Machine;
use crate::scalar::{self, Reply};
use crate::{Callable, Lookup, ObjectRef, Primitive, RuntimeError, ScalarOp, Value};

impl Machine {
    /// Receiver dispatch: only `target`'s own method table is consulted.
    /// Scalars dispatch through their kind's primitive table, null has no
    /// methods.
    pub(crate) fn lookup_method(target: &Value, name: &Name) -> Result<Callable, RuntimeError> {
        let found = match target {
            Value::Object(object) => object.method(name),
            Value::Null => None,
            other => other.scalar().and_then(|scalar| {
                let op = ScalarOp::lookup(&scalar, name)?;
                Some(Callable::Primitive(Primitive::Scalar(scalar, op)))
            }),
        };
        found.ok_or_else(|| RuntimeError::MethodNotFound {
            name: name.clone(),
            lookup: Lookup::Receiver,
        })
    }

    /// Run `callable` with evaluated `args`. The calling frame has already
    /// popped, so the current frame is the one waiting for the result.
    pub(crate) fn invoke(
        &mut self,
        name: &Name,
        callable: Callable,
        args: SmallVec<[Value; 4]>,
    ) -> Result<(), RuntimeError> {
        trace!(%name, kind = callable.kind_name(), args = args.len(), "invoke");
        match callable {
            Callable::Method(method) => {
                let context = self.activation(name, &method.receiver, &method.params, &args)?;
                let exit = self.frame.clone();
                self.push(context, method.body.clone(), exit);
            }
            Callable::Lambda(lambda) => {
                let context = self.activation(name, &lambda.receiver, &lambda.params, &args)?;
                self.push(context, lambda.body.clone(), lambda.exit.clone());
            }
            Callable::Primitive(Primitive::Host(host)) => {
                let value = (host.func)(self, args.as_slice())?;
                self.receive(value);
            }
            Callable::Primitive(Primitive::Scalar(value, op)) => {
                match scalar::apply(&value, op, &args)? {
                    Reply::Value(result) => self.receive(result),
                    Reply::Send { target, method } => {
                        let method = Name::from(method);
                        let callable = Self::lookup_method(&target, &method)?;
                        self.invoke(&method, callable, SmallVec::new())?;
                    }
                }
            }
            Callable::Getter { target, field } => {
                self.receive(target.field(&field).unwrap_or(Value::Null));
            }
            Callable::Setter { target, field } => {
                let value = args.into_iter().next().unwrap_or(Value::Null);
                target.set_field(field, value.clone());
                self.receive(value);
            }
        }
        Ok(())
    }

    /// A fresh activation object owned by `receiver` with each parameter
    /// bound as a property.
    fn activation(
        &self,
        name: &Name,
        receiver: &ObjectRef,
        params: &[Name],
        args: &[Value],
    ) -> Result<ObjectRef, RuntimeError> {
        if self.config.strict_arity && params.len() != args.len() {
            return Err(RuntimeError::ArityMismatch {
                method: name.clone(),
                expected: params.len(),
                got: args.len(),
            });
        }
        let context = receiver.child();
        for (index, param) in params.iter().enumerate() {
            let arg = args.get(index).cloned().unwrap_or(Value::Null);
            context.define_property(param.clone(), arg);
        }
        Ok(context)
    }
}
