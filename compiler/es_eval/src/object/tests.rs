use pretty_assertions::assert_eq;

use super::*;

fn field_of(callable: Option<Callable>) -> Option<Name> {
    match callable {
        Some(Callable::Getter { field, .. } | Callable::Setter { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn define_property_installs_accessor_pair() {
    let object = ObjectRef::root();
    object.define_property(Name::from("x"), Value::Number(5.0));

    assert_eq!(object.field("x"), Some(Value::Number(5.0)));
    assert_eq!(object.method_names(), vec![Name::from("x"), Name::from("x=")]);
    assert!(matches!(object.method("x"), Some(Callable::Getter { .. })));
    assert!(matches!(object.method("x="), Some(Callable::Setter { .. })));
    assert_eq!(field_of(object.method("x=")), Some(Name::from("x")));
}

#[test]
fn lexical_lookup_walks_owner_chain() {
    let outer = ObjectRef::root();
    outer.define_property(Name::from("foo"), Value::Number(1.0));
    let middle = outer.child();
    let inner = middle.child();

    assert!(inner.lookup_lexical("foo").is_some());
    assert!(inner.method("foo").is_none());
    assert!(inner.lookup_lexical("bar").is_none());
}

#[test]
fn lexical_lookup_prefers_nearest() {
    let outer = ObjectRef::root();
    outer.define_property(Name::from("x"), Value::Number(1.0));
    let inner = outer.child();
    inner.define_property(Name::from("x"), Value::Number(2.0));

    let Some(Callable::Getter { target, .. }) = inner.lookup_lexical("x") else {
        panic!("expected a getter");
    };
    assert!(target.ptr_eq(&inner));
}

#[test]
fn mix_in_copies_methods_and_scalar() {
    let source = ObjectRef::root();
    source.define_property(Name::from("a"), Value::Null);
    source.set_scalar(Scalar::Bool(true));
    let target = ObjectRef::root();
    target.define_property(Name::from("b"), Value::Null);

    target.mix_in(&source);

    assert_eq!(
        target.method_names(),
        vec![
            Name::from("a"),
            Name::from("a="),
            Name::from("b"),
            Name::from("b="),
        ]
    );
    assert_eq!(target.scalar(), Some(Scalar::Bool(true)));
    // Copied accessors still address the source's field.
    let Some(Callable::Getter { target: owner, .. }) = target.method("a") else {
        panic!("expected a getter");
    };
    assert!(owner.ptr_eq(&source));
}

#[test]
fn mix_in_self_is_a_no_op() {
    let object = ObjectRef::root();
    object.define_property(Name::from("a"), Value::Null);
    object.mix_in(&object.clone());
    assert_eq!(object.method_names().len(), 2);
}

#[test]
fn child_owner_link() {
    let parent = ObjectRef::root();
    let child = parent.child();
    assert!(child.owner().is_some_and(|owner| owner.ptr_eq(&parent)));
    assert!(parent.owner().is_none());
}
