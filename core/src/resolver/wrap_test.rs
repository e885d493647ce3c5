//! Tests for the wrapping policy.

use bumpalo::Bump;
use core::fmt;
use pretty_assertions::assert_eq;

use crate::{
    ContextBuilder, ContextResolver, Resolved, Value,
    values::{
        Seq,
        capabilities::{HasElements, HasStringForm, HostObject},
    },
};

#[test]
fn test_primitives_pass_through() {
    let arena = Bump::new();
    let root = ContextResolver::root(&arena, Value::Null);

    for value in [
        Value::Null,
        Value::Bool(true),
        Value::Int(-7),
        Value::Float(2.5),
        Value::Str("text"),
    ] {
        assert_eq!(root.wrap(value), Resolved::Value(value));
    }
}

#[test]
fn test_sequence_is_wrapped_element_wise() {
    let arena = Bump::new();
    let builder = ContextBuilder::new(&arena);
    let record = builder.record("P", [("n", Value::Int(1))], []).unwrap();
    let inner = builder.seq(&[Value::Int(2)]);
    drop(builder);
    let items = [Value::Int(1), Value::Str("two"), record, inner];
    let seq = Value::Seq(Seq::new(&items));

    let root = ContextResolver::root(&arena, Value::Null);
    let wrapped = root.wrap(seq).as_list().unwrap();

    assert_eq!(wrapped.len(), items.len());
    for (i, item) in items.iter().enumerate() {
        assert_eq!(wrapped[i], root.wrap(*item), "element {}", i);
    }
    assert!(matches!(wrapped[2], Resolved::Scope(scope) if core::ptr::eq(scope.parent().unwrap(), root)));
    assert_eq!(wrapped[3].as_list().map(|l| l.len()), Some(1));

    let list = root.wrap(seq);
    assert_eq!(list.get(1), Some(Resolved::Value(Value::Str("two"))));
    assert_eq!(list.get(3).and_then(|inner| inner.get(0)), Some(Resolved::Value(Value::Int(2))));
    assert_eq!(list.get(9), None);
    assert_eq!(Resolved::Value(Value::Int(1)).get(0), None);
}

#[test]
fn test_empty_sequence_wraps_to_empty_list() {
    let arena = Bump::new();
    let root = ContextResolver::root(&arena, Value::Null);

    let wrapped = root.wrap(Value::Seq(Seq::new(&[])));
    assert_eq!(wrapped, Resolved::List(&[]));
    assert!(wrapped.is_empty());
}

#[test]
fn test_mapping_becomes_scope() {
    let arena = Bump::new();
    let builder = ContextBuilder::new(&arena);
    let map = builder.map([("k", Value::Int(1))]).unwrap();

    let root = ContextResolver::root(&arena, Value::Null);
    let Resolved::Scope(scope) = root.wrap(map) else {
        panic!("mapping should be wrapped in a scope");
    };
    assert_eq!(scope.value(), map);
    assert_eq!(scope.depth(), 1);
    assert!(core::ptr::eq(scope.parent().unwrap(), root));
}

/// Iterable by position and by key at the same time.
#[derive(Debug)]
struct Headers;

impl HasStringForm for Headers {
    fn write_string(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("Headers")
    }
}

impl<'a> HasElements<'a> for Headers {
    fn elements(&self, _arena: &'a Bump) -> &'a [Value<'a>] {
        &[]
    }
}

impl<'a> HostObject<'a> for Headers {
    fn type_name(&self) -> &str {
        "Headers"
    }

    fn as_elements(&self) -> Option<&dyn HasElements<'a>> {
        Some(self)
    }

    fn is_mapping(&self) -> bool {
        true
    }
}

/// Iterable by position only.
#[derive(Debug)]
struct Range(i64);

impl HasStringForm for Range {
    fn write_string(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "0...{}", self.0)
    }
}

impl<'a> HasElements<'a> for Range {
    fn elements(&self, arena: &'a Bump) -> &'a [Value<'a>] {
        let items = (0..self.0).map(Value::Int).collect::<Vec<_>>();
        arena.alloc_slice_copy(&items)
    }
}

impl<'a> HostObject<'a> for Range {
    fn type_name(&self) -> &str {
        "Range"
    }

    fn as_elements(&self) -> Option<&dyn HasElements<'a>> {
        Some(self)
    }
}

#[test]
fn test_mapping_like_iterable_is_not_expanded() {
    let arena = Bump::new();
    let headers = Headers;

    let root = ContextResolver::root(&arena, Value::Null);
    assert!(matches!(root.wrap(Value::Object(&headers)), Resolved::Scope(_)));
}

#[test]
fn test_sequence_like_host_object_is_expanded() {
    let arena = Bump::new();
    let range = Range(3);

    let root = ContextResolver::root(&arena, Value::Null);
    let wrapped = root.wrap(Value::Object(&range));
    let values = wrapped
        .as_list()
        .unwrap()
        .iter()
        .map(|item| item.as_value())
        .collect::<Vec<_>>();
    assert_eq!(
        values,
        vec![Some(Value::Int(0)), Some(Value::Int(1)), Some(Value::Int(2))]
    );
    assert_eq!(wrapped.to_display_string(), "[0, 1, 2]");
}

#[test]
fn test_list_of_records_keeps_outer_scope_visible() {
    let arena = Bump::new();
    let builder = ContextBuilder::new(&arena);
    let people = builder.seq(&[
        builder.record("Person", [("name", builder.str("Ann"))], []).unwrap(),
        builder.record("Person", [("name", builder.str("Ben"))], []).unwrap(),
    ]);
    let context = builder
        .map([("people", people), ("greeting", builder.str("Hi"))])
        .unwrap();

    let root = ContextResolver::root(&arena, context);
    let list = root.lookup("people").unwrap().unwrap();
    let lines = list
        .as_list()
        .unwrap()
        .iter()
        .map(|item| {
            let scope = item.as_scope().unwrap();
            let greeting = scope.lookup("greeting").unwrap().unwrap();
            let name = scope.lookup("name").unwrap().unwrap();
            format!("{} {}", greeting, name)
        })
        .collect::<Vec<_>>();

    assert_eq!(lines, vec!["Hi Ann", "Hi Ben"]);
    assert_eq!(list.to_display_string(), r#"[#<Person name="Ann">, #<Person name="Ben">]"#);
}
