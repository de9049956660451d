// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

/// The scalar kinds a leaf can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Int,
    Float,
    Bool,
    Str,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::Bool => "boolean",
            Kind::Str => "string",
        };
        f.write_str(name)
    }
}

/// A single scalar as stored by the backing store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Str(_) => Kind::Str,
        }
    }

    /// The zero value of a kind: `0`, `0.0`, `false` or `""`.
    pub fn zero(kind: Kind) -> Value {
        match kind {
            Kind::Int => Value::Int(0),
            Kind::Float => Value::Float(0.0),
            Kind::Bool => Value::Bool(false),
            Kind::Str => Value::Str(String::new()),
        }
    }

    /// Interpret literal text as a value of `kind`.
    ///
    /// Integers accept an optional sign and a `0x` prefix, booleans accept
    /// `true/false`, `yes/no` and `on/off` in any case, strings accept anything.
    pub fn coerce(kind: Kind, text: &str) -> Option<Value> {
        match kind {
            Kind::Int => parse_int(text).map(Value::Int),
            Kind::Float => text.trim().parse::<f64>().ok().map(Value::Float),
            Kind::Bool => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" => Some(Value::Bool(true)),
                "false" | "no" | "off" => Some(Value::Bool(false)),
                _ => None,
            },
            Kind::Str => Some(Value::Str(text.to_string())),
        }
    }
}

fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let magnitude = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u64::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) => unsigned.parse::<u64>().ok()?,
        None => return None,
    };

    let signed = if negative { -i128::from(magnitude) } else { i128::from(magnitude) };
    i64::try_from(signed).ok()
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for String {}
}

/// Rust types that map onto one scalar [`Kind`].
pub trait Scalar: sealed::Sealed + Clone + Default + PartialEq + fmt::Debug + Serialize {
    const KIND: Kind;

    fn from_value(value: &Value) -> Option<Self>;
    fn to_value(&self) -> Value;

    /// Append the canonical literal of `self` to `out`.
    fn render(&self, out: &mut String);
}

impl Scalar for i64 {
    const KIND: Kind = Kind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn render(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl Scalar for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn render(&self, out: &mut String) {
        // Debug keeps the fractional part and round-trips through `parse`.
        out.push_str(&format!("{:?}", self));
    }
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn render(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl Scalar for String {
    const KIND: Kind = Kind::Str;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }

    fn render(&self, out: &mut String) {
        out.push('"');
        for ch in self.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                other => out.push(other),
            }
        }
        out.push('"');
    }
}

/// An ordered, homogeneous list of scalars.
///
/// Every list carries its canonical literal (`{1, 2, 3}`), rendered once when
/// the list is built. A list used as a default is therefore frozen at the
/// moment it was declared.
#[derive(Debug, Clone)]
pub struct List<T: Scalar> {
    items: Vec<T>,
    literal: String,
}

impl<T: Scalar> List<T> {
    pub fn new(items: Vec<T>) -> Self {
        let literal = render_list(&items);
        Self { items, literal }
    }

    /// The canonical braced form, e.g. `{"a", "b"}` or `{true, false}`.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

fn render_list<T: Scalar>(items: &[T]) -> String {
    let mut out = String::from("{");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.render(&mut out);
    }
    out.push('}');
    out
}

impl<T: Scalar> Default for List<T> {
    fn default() -> Self {
        List::new(Vec::new())
    }
}

impl<T: Scalar> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Scalar> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Scalar> PartialEq<Vec<T>> for List<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

impl<T: Scalar> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List::new(items)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        List::new(items.into())
    }
}

impl<T: Scalar> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::new(iter.into_iter().collect())
    }
}

impl<T: Scalar> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Scalar> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_integers() {
        assert_eq!(Value::coerce(Kind::Int, "42"), Some(Value::Int(42)));
        assert_eq!(Value::coerce(Kind::Int, "-7"), Some(Value::Int(-7)));
        assert_eq!(Value::coerce(Kind::Int, "0x1F"), Some(Value::Int(31)));
        assert_eq!(Value::coerce(Kind::Int, "4.5"), None);
        assert_eq!(Value::coerce(Kind::Int, "forty"), None);
        assert_eq!(Value::coerce(Kind::Int, "+12"), Some(Value::Int(12)));
        assert_eq!(Value::coerce(Kind::Int, "-0x10"), Some(Value::Int(-16)));
    }

    #[test]
    fn coerce_integer_bounds() {
        assert_eq!(Value::coerce(Kind::Int, "-9223372036854775808"), Some(Value::Int(i64::MIN)));
        assert_eq!(Value::coerce(Kind::Int, "9223372036854775807"), Some(Value::Int(i64::MAX)));
        assert_eq!(Value::coerce(Kind::Int, "-0x8000000000000000"), Some(Value::Int(i64::MIN)));
        assert_eq!(Value::coerce(Kind::Int, "9223372036854775808"), None);
        assert_eq!(Value::coerce(Kind::Int, "0x8000000000000000"), None);
    }

    #[test]
    fn coerce_integers_rejects_repeated_signs() {
        for text in ["--5", "+-5", "-+5", "0x-5", "-0x-5", "0x+5", "-", "0x", "-0x", ""] {
            assert_eq!(Value::coerce(Kind::Int, text), None, "{:?} should not coerce", text);
        }
    }

    #[test]
    fn coerce_booleans_and_floats() {
        assert_eq!(Value::coerce(Kind::Bool, "Yes"), Some(Value::Bool(true)));
        assert_eq!(Value::coerce(Kind::Bool, "off"), Some(Value::Bool(false)));
        assert_eq!(Value::coerce(Kind::Bool, "maybe"), None);
        assert_eq!(Value::coerce(Kind::Float, "2.5"), Some(Value::Float(2.5)));
        assert_eq!(Value::coerce(Kind::Float, "3"), Some(Value::Float(3.0)));
    }

    #[test]
    fn zero_values() {
        assert_eq!(Value::zero(Kind::Int), Value::Int(0));
        assert_eq!(Value::zero(Kind::Str), Value::Str(String::new()));
        assert_eq!(Value::zero(Kind::Bool).kind(), Kind::Bool);
    }

    #[test]
    fn list_literals() {
        assert_eq!(List::from([42i64, 13]).literal(), "{42, 13}");
        assert_eq!(List::from([true, false]).literal(), "{true, false}");
        assert_eq!(List::from([1.0f64, 2.5]).literal(), "{1.0, 2.5}");
        assert_eq!(List::<i64>::new(vec![]).literal(), "{}");

        let names: List<String> = vec!["Abraham \"Abe\" Lincoln".to_string()].into();
        assert_eq!(names.literal(), r#"{"Abraham \"Abe\" Lincoln"}"#);
    }

    #[test]
    fn list_equality_ignores_literal() {
        let a: List<i64> = [1, 2, 3].into();
        let b: List<i64> = (1..=3).collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a[1], 2);
    }
}
