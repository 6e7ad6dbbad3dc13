//! Prototype objects.
//!
//! An object has fields, a method table and an optional owner: the object
//! whose context it was created in. The owner link is only consulted by
//! lexical (unqualified) dispatch.
//!
//! Objects are shared through [`ObjectRef`], a newtype over `Rc<Object>`.
//! Links between objects (owner, captured receivers, accessors) are strong;
//! reference cycles formed by programs are not reclaimed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use es_ir::Name;
use rustc_hash::FxHashMap;

use crate::{Callable, Scalar, Value};

pub struct Object {
    owner: Option<ObjectRef>,
    fields: RefCell<FxHashMap<Name, Value>>,
    methods: RefCell<FxHashMap<Name, Callable>>,
    /// Set on boxed scalars and on objects that delegated to one.
    scalar: RefCell<Option<Scalar>>,
}

/// Shared handle to an [`Object`]. Equality is identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<Object>);

impl ObjectRef {
    pub fn new(owner: Option<ObjectRef>) -> Self {
        ObjectRef(Rc::new(Object {
            owner,
            fields: RefCell::new(FxHashMap::default()),
            methods: RefCell::new(FxHashMap::default()),
            scalar: RefCell::new(None),
        }))
    }

    /// An object with no owner.
    pub fn root() -> Self {
        Self::new(None)
    }

    /// A fresh object owned by `self`.
    pub fn child(&self) -> Self {
        Self::new(Some(self.clone()))
    }

    pub fn owner(&self) -> Option<&ObjectRef> {
        self.0.owner.as_ref()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn field(&self, name: &str) -> Option<Value> {
        self.0.fields.borrow().get(name).cloned()
    }

    pub fn set_field(&self, name: Name, value: Value) {
        self.0.fields.borrow_mut().insert(name, value);
    }

    /// This object's own method, without looking at the owner.
    pub fn method(&self, name: &str) -> Option<Callable> {
        self.0.methods.borrow().get(name).cloned()
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.0.methods.borrow().contains_key(name)
    }

    pub fn define_method(&self, name: Name, callable: Callable) {
        self.0.methods.borrow_mut().insert(name, callable);
    }

    /// Own method names, sorted.
    pub fn method_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.0.methods.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// Set a field and install its accessor pair: `name` reads the field,
    /// `name=` writes it and yields the written value.
    pub fn define_property(&self, name: Name, value: Value) {
        let setter = name.setter();
        self.define_method(
            name.clone(),
            Callable::Getter {
                target: self.clone(),
                field: name.clone(),
            },
        );
        self.define_method(
            setter,
            Callable::Setter {
                target: self.clone(),
                field: name.clone(),
            },
        );
        self.set_field(name, value);
    }

    pub fn scalar(&self) -> Option<Scalar> {
        self.0.scalar.borrow().clone()
    }

    pub fn set_scalar(&self, scalar: Scalar) {
        *self.0.scalar.borrow_mut() = Some(scalar);
    }

    /// Lexical dispatch: own methods first, then each owner in turn.
    pub fn lookup_lexical(&self, name: &str) -> Option<Callable> {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(callable) = object.method(name) {
                return Some(callable);
            }
            current = object.owner();
        }
        None
    }

    /// Copy every method of `source` (and its scalar, if it has one) into
    /// this object. Existing methods of the same name are replaced.
    pub fn mix_in(&self, source: &ObjectRef) {
        if self.ptr_eq(source) {
            return;
        }
        let copied: Vec<(Name, Callable)> = source
            .0
            .methods
            .borrow()
            .iter()
            .map(|(name, callable)| (name.clone(), callable.clone()))
            .collect();
        self.0.methods.borrow_mut().extend(copied);
        if let Some(scalar) = source.scalar() {
            self.set_scalar(scalar);
        }
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    /// Shallow: method names and scalar only, since the object graph may
    /// be cyclic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("methods", &self.method_names())
            .field("scalar", &self.scalar())
            .field("has_owner", &self.owner().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
