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

//! Evaluator configuration.
//!
//! Configuration specifies limits only; enforcement happens in the evaluator.

use serde::Deserialize;

use crate::error::{FalsyError, FalsyResult};

/// Default recursion limit for nested values.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluatorConfig {
    /// Maximum nesting depth before a branch is declared falsy
    pub max_depth: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvaluatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Rejects limits the evaluator cannot work with.
    pub fn validate(&self) -> FalsyResult<()> {
        if self.max_depth == 0 {
            return Err(FalsyError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads and validates a configuration from JSON text.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(input: &str) -> FalsyResult<Self> {
        let config: EvaluatorConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = EvaluatorConfig::from_json("{}").unwrap();
        assert_eq!(config, EvaluatorConfig::default());
    }

    #[test]
    fn json_overrides_depth() {
        let config = EvaluatorConfig::from_json(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn zero_depth_rejected() {
        let err = EvaluatorConfig::from_json(r#"{"max_depth": 0}"#).unwrap_err();
        assert_eq!(err.code(), "F_CONFIG");
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = EvaluatorConfig::from_json(r#"{"depth": 3}"#).unwrap_err();
        assert_eq!(err.code(), "F_JSON");
    }
}
