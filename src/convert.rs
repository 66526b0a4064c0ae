/*
 * ==========================================================================
 * FALSY - Truthiness with Claws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the Falsy library, a PAWX project.
 *
 * Falsy is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! Conversions into `Value`.
//!
//! These are the boundary through which host data enters the evaluator.
//! `Option::None` maps to `Absent`, so a missing binding is simply a
//! falsy value rather than a fault.

use crate::error::FalsyResult;
use crate::value::{Callable, Record, Sequence, Value};

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Absent
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Wider unsigned values saturate rather than wrap, so a huge count
// never turns into a negative or zero integer.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Integer(i64::try_from(n).unwrap_or(if n < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Sequence(v.into_iter().collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::Sequence(v.iter().cloned().collect())
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Sequence(seq)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<&Record> for Value {
    fn from(record: &Record) -> Self {
        Value::Record(record.clone())
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Value::Callable(f)
    }
}

/// JSON input maps onto the value model as follows:
/// - `null` → `Absent`
/// - numbers → `Integer` when they fit in `i64`, otherwise `Float`
/// - arrays → `Sequence`
/// - objects → `Record` (field order follows the parser)
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Absent, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let record = Record::new();
                for (name, v) in map {
                    record.set(name, Value::from(v));
                }
                Value::Record(record)
            }
        }
    }
}

impl Value {
    /// Parses JSON text into a `Value`.
    pub fn from_json_str(input: &str) -> FalsyResult<Value> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::from(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FalsyError;

    #[test]
    fn option_none_is_absent() {
        let missing: Option<&str> = None;
        assert!(Value::from(missing).is_absent());
        assert!(matches!(Value::from(Some(2u8)), Value::Integer(2)));
    }

    #[test]
    fn huge_unsigned_saturates() {
        assert!(matches!(Value::from(u64::MAX), Value::Integer(i64::MAX)));
    }

    #[test]
    fn isize_keeps_sign_and_magnitude() {
        assert!(matches!(Value::from(-5isize), Value::Integer(-5)));
        assert!(matches!(Value::from(isize::MIN), Value::Integer(n) if n == isize::MIN as i64));
    }

    #[test]
    fn json_numbers_split_by_kind() {
        let v = Value::from_json_str("[1, 1.5, 18446744073709551615]").unwrap();
        let Value::Sequence(seq) = v else {
            panic!("expected sequence");
        };
        let items: Vec<&Value> = seq.values().collect();

        assert!(matches!(items[0], Value::Integer(1)));
        assert!(matches!(items[1], Value::Float(f) if *f == 1.5));
        assert!(matches!(items[2], Value::Float(_)));
    }

    #[test]
    fn json_object_becomes_record() {
        let v = Value::from_json_str(r#"{"foo": "bar", "n": null}"#).unwrap();
        let Value::Record(record) = v else {
            panic!("expected record");
        };

        assert_eq!(record.len(), 2);
        assert!(record.get("n").is_some_and(|n| n.is_absent()));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Value::from_json_str("{oops").unwrap_err();
        assert!(matches!(err, FalsyError::Json(_)));
        assert_eq!(err.code(), "F_JSON");
    }
}
