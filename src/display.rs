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

use std::fmt;

use serde_json::{Map, Number};

use crate::value::{Key, Record, Sequence, Value};

/// ============================================================================
/// value_to_string
/// ============================================================================
/// Converts a runtime `Value` into a **human-readable string**.
/// This is used by:
///   - `Display` for `Value`
///   - tracing output from the evaluator
///
/// Examples:
///   - Integer(3)            → "3"
///   - Text("cat")           → "\"cat\""
///   - Sequence([1, 2])      → "[1, 2]"
///   - Sequence(key => 1)    → "[key => 1]"
///   - Record                → "{ foo: \"bar\" }"
///   - Callable              → "[callable]"
///
/// A record that contains itself is printed as `{ ... }` at the point
/// of re-entry.
/// ============================================================================
pub fn value_to_string(val: &Value) -> String {
    let mut path = Vec::new();
    write_value(val, &mut path)
}

fn write_value(val: &Value, path: &mut Vec<usize>) -> String {
    match val {
        // ------------------------
        // Atomic Types
        // ------------------------

        Value::Absent => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => format!("{:?}", n),
        Value::Text(s) => format!("{:?}", s),

        // ------------------------
        // Sequences
        // ------------------------

        Value::Sequence(seq) => {
            let mut out = String::from("[");
            for (i, (key, v)) in seq.entries().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if !is_positional(key, i) {
                    out.push_str(&key_to_string(key));
                    out.push_str(" => ");
                }
                out.push_str(&write_value(v, path));
            }
            out.push(']');
            out
        }

        // ------------------------
        // Records
        // ------------------------

        Value::Record(record) => {
            if path.contains(&record.id()) {
                return "{ ... }".to_string();
            }
            if record.is_empty() {
                return "{}".to_string();
            }

            path.push(record.id());
            let parts: Vec<String> = record
                .snapshot()
                .iter()
                .map(|(name, v)| format!("{}: {}", name, write_value(v, path)))
                .collect();
            path.pop();

            format!("{{ {} }}", parts.join(", "))
        }

        Value::Callable(_) => "[callable]".to_string(),
    }
}

fn is_positional(key: &Key, position: usize) -> bool {
    matches!(key, Key::Index(i) if usize::try_from(*i).map_or(false, |i| i == position))
}

fn key_to_string(key: &Key) -> String {
    match key {
        Key::Index(i) => i.to_string(),
        Key::Name(n) => format!("{:?}", n),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_to_string(self))
    }
}

/// Converts a runtime `Value` into a `serde_json::Value`.
///
/// - Sequences whose keys are exactly `0..n` become JSON arrays,
///   any other sequence becomes a JSON object keyed by its keys.
/// - Non-finite floats become `null`.
/// - Callables are **not** invoked; they serialize as `"[callable]"`.
/// - A record re-entered through itself serializes as `null`.
pub fn value_to_json(val: &Value) -> serde_json::Value {
    let mut path = Vec::new();
    json_value(val, &mut path)
}

fn json_value(val: &Value, path: &mut Vec<usize>) -> serde_json::Value {
    match val {
        Value::Absent => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => serde_json::Value::Number(Number::from(*n)),
        Value::Float(n) => Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(seq) => json_sequence(seq, path),
        Value::Record(record) => json_record(record, path),
        Value::Callable(_) => serde_json::Value::String("[callable]".to_string()),
    }
}

fn json_sequence(seq: &Sequence, path: &mut Vec<usize>) -> serde_json::Value {
    let positional = seq.entries().enumerate().all(|(i, (k, _))| is_positional(k, i));

    if positional {
        return serde_json::Value::Array(seq.values().map(|v| json_value(v, path)).collect());
    }

    let mut map = Map::new();
    for (key, v) in seq.entries() {
        let name = match key {
            Key::Index(i) => i.to_string(),
            Key::Name(n) => n.clone(),
        };
        map.insert(name, json_value(v, path));
    }
    serde_json::Value::Object(map)
}

fn json_record(record: &Record, path: &mut Vec<usize>) -> serde_json::Value {
    if path.contains(&record.id()) {
        return serde_json::Value::Null;
    }

    path.push(record.id());
    let mut map = Map::new();
    for (name, v) in record.snapshot() {
        map.insert(name, json_value(&v, path));
    }
    path.pop();

    serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn atomics_display() {
        assert_eq!(Value::Absent.to_string(), "null");
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Float(0.0).to_string(), "0.0");
        assert_eq!(Value::Text("0".into()).to_string(), "\"0\"");
    }

    #[test]
    fn keyed_sequence_shows_keys() {
        let mut seq = Sequence::new();
        seq.push(1).insert("key", Value::Absent);

        assert_eq!(Value::Sequence(seq).to_string(), "[1, \"key\" => null]");
    }

    #[test]
    fn self_referencing_record_terminates() {
        let record = Record::new();
        record.set("me", Value::Record(record.clone()));

        assert_eq!(Value::Record(record.clone()).to_string(), "{ me: { ... } }");
        assert_eq!(value_to_json(&Value::Record(record)), json!({ "me": null }));
    }

    #[test]
    fn json_output_shapes() {
        let mut keyed = Sequence::new();
        keyed.insert("", "");

        let positional: Sequence = vec![1, 2].into_iter().collect();

        assert_eq!(value_to_json(&Value::Sequence(keyed)), json!({ "": "" }));
        assert_eq!(value_to_json(&Value::Sequence(positional)), json!([1, 2]));
        assert_eq!(value_to_json(&Value::Float(f64::NAN)), json!(null));
        assert_eq!(value_to_json(&Value::callable(|| true)), json!("[callable]"));
    }
}
