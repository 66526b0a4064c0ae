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

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Falsy runtime value representation.
///
/// This is the closed set of shapes the evaluator dispatches on.
/// Every input, however it was produced, ends up as one of these.
#[derive(Clone)]
pub enum Value {
    // Atomic values
    Absent,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),

    // Ordered container; keys are carried but never evaluated
    Sequence(Sequence),

    // Structured object with named fields
    // - Shared across copies using Rc<RefCell<_>>
    Record(Record),

    // Zero-argument host closure, invoked once per occurrence
    Callable(Callable),
}

impl Value {
    /// Returns a stable type name string (useful for logs and errors).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "Absent",
            Value::Bool(_) => "Bool",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Text(_) => "Text",
            Value::Sequence(_) => "Sequence",
            Value::Record(_) => "Record",
            Value::Callable(_) => "Callable",
        }
    }

    /// Wraps a closure as a `Value::Callable`.
    ///
    /// The closure may return anything convertible into a `Value`,
    /// including `()` which is treated as `Absent`.
    pub fn callable<F, R>(f: F) -> Self
    where
        F: Fn() -> R + 'static,
        R: Into<Value>,
    {
        Value::Callable(Callable::new(f))
    }

    /// True for values without members to recurse into.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Value::Absent | Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::Text(_)
        )
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Attempts to extract a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Absent
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "Absent"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Integer(n) => write!(f, "Integer({})", n),
            Value::Float(n) => write!(f, "Float({:?})", n),
            Value::Text(s) => write!(f, "Text({:?})", s),
            Value::Sequence(seq) => write!(f, "[Sequence len={}]", seq.len()),
            Value::Record(record) => write!(f, "[Record fields={}]", record.len()),
            Value::Callable(_) => write!(f, "[Callable]"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sequence keys
// ---------------------------------------------------------------------------

/// Key attached to a sequence member.
///
/// Keys exist so keyed containers can be represented faithfully;
/// they play no part in truthiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// Ordered container of keyed members.
///
/// Plain pushes receive sequential integer keys; explicit keys may be
/// integers or names. Insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    entries: Vec<(Key, Value)>,
    next_index: i64,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under the next free integer key.
    ///
    /// The next key is one past the largest integer key seen so far,
    /// or `0` when no integer key exists yet.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        let index = self.next_index;
        self.next_index = index.saturating_add(1);
        self.entries.push((Key::Index(index), value.into()));
        self
    }

    /// Stores a value under an explicit key.
    ///
    /// An existing entry with the same key is overwritten in place.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        if let Key::Index(i) = key {
            self.next_index = self.next_index.max(i.saturating_add(1));
        }

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates member values in insertion order, keys dropped.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<V: Into<Value>> FromIterator<V> for Sequence {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        for value in iter {
            seq.push(value);
        }
        seq
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Structured object with named fields.
///
/// Clones share the same field storage, so a change made through one
/// handle is visible to every evaluation that follows.
#[derive(Clone, Default)]
pub struct Record {
    fields: Rc<RefCell<Vec<(String, Value)>>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing the previous value if it exists.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> &Self {
        let name = name.into();
        let value = value.into();
        let mut fields = self.fields.borrow_mut();

        match fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => fields.push((name, value)),
        }
        drop(fields);
        self
    }

    /// Returns a copy of the field value, if present.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.fields
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        let mut fields = self.fields.borrow_mut();
        let index = fields.iter().position(|(n, _)| n == name)?;
        Some(fields.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.fields.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.borrow().is_empty()
    }

    /// Copies out the current fields.
    ///
    /// Nested records and callables are cloned by handle, so this is cheap
    /// and lets callers recurse without holding the borrow.
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.fields.borrow().clone()
    }

    /// Identity of the shared storage, stable for the record's lifetime.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.fields) as *const () as usize
    }

    /// True when both handles point at the same record.
    pub fn ptr_eq(a: &Record, b: &Record) -> bool {
        Rc::ptr_eq(&a.fields, &b.fields)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.fields.borrow().iter().map(|(n, _)| n.clone()).collect();
        f.debug_struct("Record").field("fields", &names).finish()
    }
}

// ---------------------------------------------------------------------------
// Callable
// ---------------------------------------------------------------------------

/// Zero-argument host closure.
#[derive(Clone)]
pub struct Callable(Rc<dyn Fn() -> Value>);

impl Callable {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + 'static,
        R: Into<Value>,
    {
        Callable(Rc::new(move || -> Value { f().into() }))
    }

    /// Invokes the closure once and returns what it produced.
    pub fn call(&self) -> Value {
        (self.0)()
    }

    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Callable]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_continues_after_largest_index() {
        let mut seq = Sequence::new();
        seq.push(1).insert(5, 2).push(3);

        let keys: Vec<Key> = seq.entries().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![Key::Index(0), Key::Index(5), Key::Index(6)]);
    }

    #[test]
    fn push_after_named_keys_starts_at_zero() {
        let mut seq = Sequence::new();
        seq.insert("key", "value").push(true);

        assert!(matches!(seq.get(&Key::Index(0)), Some(Value::Bool(true))));
    }

    #[test]
    fn negative_index_does_not_move_next_key() {
        let mut seq = Sequence::new();
        seq.insert(-5, "a").push("b");

        assert!(matches!(seq.get(&Key::Index(0)), Some(Value::Text(_))));
    }

    #[test]
    fn large_sequence_keys_stay_sequential() {
        let count = 200_000;
        let seq: Sequence = (0..count).map(|i| i % 7).collect();

        assert_eq!(seq.len(), count);
        let last = seq.entries().last().map(|(k, _)| k.clone());
        assert_eq!(last, Some(Key::from(count - 1)));

        let mut seq = seq;
        seq.push(true);
        assert!(matches!(seq.get(&Key::from(count)), Some(Value::Bool(true))));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut seq = Sequence::new();
        seq.insert("a", 1).insert("b", 2).insert("a", 3);

        assert_eq!(seq.len(), 2);
        assert!(matches!(seq.get(&Key::from("a")), Some(Value::Integer(3))));
    }

    #[test]
    fn record_clones_share_fields() {
        let record = Record::new();
        let alias = record.clone();
        alias.set("foo", "bar");

        assert_eq!(record.len(), 1);
        assert!(Record::ptr_eq(&record, &alias));
        assert_eq!(record.id(), alias.id());
        assert_eq!(record.get("foo").and_then(|v| v.as_text().map(String::from)), Some("bar".into()));
    }

    #[test]
    fn record_remove_returns_old_value() {
        let record = Record::new();
        record.set("n", 1);

        assert!(matches!(record.remove("n"), Some(Value::Integer(1))));
        assert!(record.is_empty());
        assert!(record.remove("n").is_none());
    }

    #[test]
    fn callable_unit_return_is_absent() {
        let f = Callable::new(|| ());
        assert!(f.call().is_absent());
    }

    #[test]
    fn type_names_are_stable() {
        assert_eq!(Value::Absent.type_name(), "Absent");
        assert_eq!(Value::Sequence(Sequence::new()).type_name(), "Sequence");
        assert_eq!(Value::callable(|| 1).type_name(), "Callable");
    }
}
