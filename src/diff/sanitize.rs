//! Replace value rendering.
//!
//! `sanitize` turns the representative rows of a replace pair into the
//! value shown in the report: unchanged fields are kept, changed fields
//! become `"old ---> new"`.

use super::ReplaceFormat;
use crate::model::Value;

/// Render one replace pair.
///
/// Lists are compared element-wise with the shorter side padded by empty
/// text; an atomic value paired with a list is treated as a one-element
/// list. Never fails.
#[must_use]
pub fn sanitize(a: &Value, b: &Value, format: &ReplaceFormat) -> Value {
    match (a, b) {
        (Value::List(xs), Value::List(ys)) => sanitize_lists(xs, ys, format),
        (Value::List(xs), atom) => sanitize_lists(xs, std::slice::from_ref(atom), format),
        (atom, Value::List(ys)) => sanitize_lists(std::slice::from_ref(atom), ys, format),
        (x, y) => compare(x, y, format),
    }
}

fn sanitize_lists(xs: &[Value], ys: &[Value], format: &ReplaceFormat) -> Value {
    let pad = Value::Text(String::new());
    let len = xs.len().max(ys.len());
    Value::List(
        (0..len)
            .map(|i| {
                let x = xs.get(i).unwrap_or(&pad);
                let y = ys.get(i).unwrap_or(&pad);
                compare(x, y, format)
            })
            .collect(),
    )
}

fn compare(x: &Value, y: &Value, format: &ReplaceFormat) -> Value {
    let sep = &format.separator;
    if x == y {
        x.clone()
    } else if x.is_truthy() && y.is_truthy() {
        Value::Text(format!("{x}{sep}{y}"))
    } else if x.is_truthy() {
        Value::Text(format!("{x}{sep}{}", format.deleted))
    } else {
        Value::Text(format!("{}{sep}{y}", format.added))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(a: Value, b: Value) -> Value {
        sanitize(&a, &b, &ReplaceFormat::default())
    }

    fn chars(s: &str) -> Value {
        Value::list(s.chars())
    }

    #[test]
    fn test_atomic() {
        assert_eq!(s(Value::Null, Value::Int(1)), Value::from("ADD ---> 1"));
        assert_eq!(s(Value::Int(1), Value::Null), Value::from("1 ---> DEL"));
        assert_eq!(s("abc".into(), "acc".into()), Value::from("abc ---> acc"));
        assert_eq!(s("same".into(), "same".into()), Value::from("same"));
    }

    #[test]
    fn test_lists() {
        assert_eq!(s(chars("abc"), chars("acc")), Value::list(["a", "b ---> c", "c"]));
        assert_eq!(s(chars("abc"), chars("ab")), Value::list(["a", "b", "c ---> DEL"]));
        assert_eq!(s(chars("ab"), chars("abc")), Value::list(["a", "b", "ADD ---> c"]));
        assert_eq!(s(chars("abc"), chars("abb")), Value::list(["a", "b", "c ---> b"]));
        assert_eq!(s(Value::list(["abc"]), Value::list(["abb"])), Value::list(["abc ---> abb"]));
    }

    #[test]
    fn test_mixed_values() {
        assert_eq!(
            s(Value::list([1i64, 2, 3]), Value::list([1i64, 3, 3])),
            Value::List(vec![Value::Int(1), "2 ---> 3".into(), Value::Int(3)])
        );
        assert_eq!(
            s(
                Value::list([1i64, 2, 3]),
                Value::List(vec![Value::Int(1), Value::Int(2), Value::Null])
            ),
            Value::List(vec![Value::Int(1), Value::Int(2), "3 ---> DEL".into()])
        );
        assert_eq!(
            s(
                Value::List(vec![Value::Int(1), Value::Null, Value::Int(3)]),
                Value::list([1i64, 2, 3])
            ),
            Value::List(vec![Value::Int(1), "ADD ---> 2".into(), Value::Int(3)])
        );
    }

    #[test]
    fn test_atomic_against_list() {
        assert_eq!(s("a".into(), chars("ab")), Value::list(["a", "ADD ---> b"]));
        assert_eq!(s(chars("ab"), "b".into()), Value::list(["a ---> b", "b ---> DEL"]));
    }

    #[test]
    fn test_custom_format() {
        let format = ReplaceFormat {
            separator: "=>".into(),
            deleted: "-".into(),
            added: "+".into(),
        };
        assert_eq!(sanitize(&"x".into(), &"y".into(), &format), Value::from("x=>y"));
        assert_eq!(sanitize(&"x".into(), &"".into(), &format), Value::from("x=>-"));
        assert_eq!(sanitize(&"".into(), &"y".into(), &format), Value::from("+=>y"));
    }
}
