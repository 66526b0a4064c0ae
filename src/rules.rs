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

use crate::value::Value;

/// Borrowed view of a value with no members to recurse into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Atomic<'a> {
    Absent,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(&'a str),
}

impl<'a> Atomic<'a> {
    /// Returns the atomic view of `value`, or `None` for sequences,
    /// records and callables.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Absent => Some(Atomic::Absent),
            Value::Bool(b) => Some(Atomic::Bool(*b)),
            Value::Integer(n) => Some(Atomic::Integer(*n)),
            Value::Float(n) => Some(Atomic::Float(*n)),
            Value::Text(s) => Some(Atomic::Text(s)),
            Value::Sequence(_) | Value::Record(_) | Value::Callable(_) => None,
        }
    }

    /// Determines whether an **atomic** value is considered truthy.
    ///
    /// # Truthiness Rules
    /// The following values are considered **false**:
    /// - `Atomic::Absent`
    /// - `Atomic::Bool(false)`
    /// - `Atomic::Integer(0)`
    /// - `Atomic::Float(0.0)` and `Atomic::Float(-0.0)`
    /// - `Atomic::Text("")` (empty string)
    /// - `Atomic::Text("0")`
    ///
    /// All other atomic values are considered **true**, including:
    /// - Negative numbers and tiny non-zero floats
    /// - Whitespace-only strings
    /// - `"false"`, `"0.0"` and `"00"`
    ///
    /// Float comparison is exact; there is no epsilon. `NaN` is not equal
    /// to zero and is therefore truthy.
    pub fn is_truthy(self) -> bool {
        match self {
            Atomic::Absent => false,
            Atomic::Bool(b) => b,
            Atomic::Integer(n) => n != 0,
            Atomic::Float(n) => n != 0.0,
            Atomic::Text(s) => !s.is_empty() && s != "0",
        }
    }
}

/// Applies the atomic rule table to a `Value`.
///
/// # Returns
/// - `Some(verdict)` for atomic values
/// - `None` for sequences, records and callables, which need the
///   recursive evaluator
pub fn is_truthy_atomic(value: &Value) -> Option<bool> {
    Atomic::from_value(value).map(Atomic::is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atomic(v: impl Into<Value>) -> bool {
        is_truthy_atomic(&v.into()).expect("atomic value")
    }

    #[test]
    fn falsy_atomics() {
        assert!(!atomic(()));
        assert!(!atomic(false));
        assert!(!atomic(0));
        assert!(!atomic(0.0));
        assert!(!atomic(-0.0));
        assert!(!atomic(""));
        assert!(!atomic("0"));
    }

    #[test]
    fn truthy_atomics() {
        assert!(atomic(true));
        assert!(atomic(-1));
        assert!(atomic(0.1));
        assert!(atomic(-0.1));
        assert!(atomic(f64::MIN_POSITIVE));
        assert!(atomic("1"));
    }

    #[test]
    fn only_empty_and_zero_strings_are_special() {
        for s in ["false", " ", "0.0", "00", "null", "\0"] {
            assert!(atomic(s), "{:?} should be truthy", s);
        }
    }

    #[test]
    fn nan_is_truthy() {
        assert!(atomic(f64::NAN));
    }

    #[test]
    fn text_view_borrows() {
        let value = Value::from("0");
        assert_eq!(Atomic::from_value(&value), Some(Atomic::Text("0")));
        assert!(!Atomic::Text("0").is_truthy());
    }

    #[test]
    fn composites_are_not_atomic() {
        assert_eq!(is_truthy_atomic(&Value::from(vec![1])), None);
        assert_eq!(is_truthy_atomic(&Value::callable(|| true)), None);
    }
}
