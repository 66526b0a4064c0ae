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

//! Recursive truthiness evaluation.
//!
//! Atomic values are judged by `rules::Atomic`; sequences, records and
//! callables recurse back into `Evaluator::evaluate` and fold their
//! members with `combinator::combine`.

use tracing::{trace, warn};

use crate::combinator::combine;
use crate::config::EvaluatorConfig;
use crate::rules::Atomic;
use crate::value::{Callable, Record, Sequence, Value};

/// Walks a value tree and decides its truthiness.
///
/// An evaluator carries the state of one evaluation pass: the current
/// depth and the identities of the records and callables being visited.
/// Re-entering one of those (a cycle) or going past `max_depth` makes
/// that branch falsy.
#[derive(Debug)]
pub struct Evaluator {
    max_depth: usize,
    depth: usize,
    path: Vec<usize>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&EvaluatorConfig::default())
    }
}

impl Evaluator {
    /// A `max_depth` of zero is raised to one so top-level composites
    /// are still evaluated.
    pub fn new(config: &EvaluatorConfig) -> Self {
        Evaluator {
            max_depth: config.max_depth.max(1),
            depth: 0,
            path: Vec::new(),
        }
    }

    /// Evaluates a single value.
    pub fn evaluate(&mut self, value: &Value) -> bool {
        let verdict = match value {
            Value::Sequence(seq) => self.evaluate_sequence(seq),
            Value::Record(record) => self.evaluate_record(record),
            Value::Callable(f) => self.evaluate_callable(f),
            Value::Absent => Atomic::Absent.is_truthy(),
            Value::Bool(b) => Atomic::Bool(*b).is_truthy(),
            Value::Integer(n) => Atomic::Integer(*n).is_truthy(),
            Value::Float(n) => Atomic::Float(*n).is_truthy(),
            Value::Text(s) => Atomic::Text(s).is_truthy(),
        };

        trace!(kind = value.type_name(), depth = self.depth, verdict, "evaluated value");
        verdict
    }

    /// Evaluates every value and folds the verdicts.
    ///
    /// Stops at the first falsy value; an empty input is falsy.
    pub fn evaluate_all<'v, I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Value>,
    {
        combine(values.into_iter().map(|v| self.evaluate(v)))
    }

    fn evaluate_sequence(&mut self, seq: &Sequence) -> bool {
        if seq.is_empty() {
            return false;
        }
        self.descend(None, |ev| ev.evaluate_all(seq.values()))
    }

    // Fields are copied out first so nothing holds the record borrowed
    // while nested callables run.
    fn evaluate_record(&mut self, record: &Record) -> bool {
        self.descend(Some(record.id()), |ev| {
            let fields = record.snapshot();
            ev.evaluate_all(fields.iter().map(|(_, v)| v))
        })
    }

    fn evaluate_callable(&mut self, f: &Callable) -> bool {
        self.descend(Some(f.id()), |ev| {
            let result = f.call();
            ev.evaluate(&result)
        })
    }

    fn descend<F>(&mut self, id: Option<usize>, f: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        if self.depth >= self.max_depth {
            warn!(max_depth = self.max_depth, "nesting limit reached, treating branch as falsy");
            return false;
        }

        if let Some(id) = id {
            if self.path.contains(&id) {
                warn!(depth = self.depth, "cyclic value detected, treating branch as falsy");
                return false;
            }
            self.path.push(id);
        }

        self.depth += 1;
        let verdict = f(self);
        self.depth -= 1;

        if id.is_some() {
            self.path.pop();
        }
        verdict
    }
}

/// Evaluates a single value with the default configuration.
pub fn evaluate(value: &Value) -> bool {
    Evaluator::default().evaluate(value)
}
