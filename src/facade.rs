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

use tracing::debug;

use crate::config::EvaluatorConfig;
use crate::evaluator::Evaluator;
use crate::value::Value;

/// Accumulates values and answers whether, taken together, they are
/// truthy.
///
/// The set is truthy only when it is non-empty and every value in it
/// is truthy. `is_falsy` is always the exact negation of `is_truthy`.
///
/// # Example
/// ```
/// use falsy::{Falsy, Value};
///
/// let mut set = Falsy::new();
/// assert!(set.is_falsy());
///
/// set.push(true).push("foo");
/// assert!(set.is_truthy());
///
/// set.push(Value::from(vec![true, false]));
/// assert!(set.is_falsy());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Falsy {
    values: Vec<Value>,
    config: EvaluatorConfig,
}

impl Falsy {
    /// Creates an empty set, which is falsy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from any collection of convertible values.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().map(Into::into).collect()
    }

    /// Replaces the evaluator limits used by this set.
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends one value to the set.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// True when the set is non-empty and every value is truthy.
    ///
    /// Callables in the set are invoked once per call to this method.
    pub fn is_truthy(&self) -> bool {
        let verdict = Evaluator::new(&self.config).evaluate_all(&self.values);
        debug!(values = self.values.len(), verdict, "evaluated value set");
        verdict
    }

    pub fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl FromIterator<Value> for Falsy {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Falsy {
            values: iter.into_iter().collect(),
            config: EvaluatorConfig::default(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for Falsy {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}
