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

use thiserror::Error;

/// Errors surfaced by the Falsy library.
///
/// Evaluation itself never fails: every value resolves to a boolean.
/// The comparison variants are reserved for comparison-style operations
/// and are not produced by the evaluator.
#[derive(Debug, Error)]
pub enum FalsyError {
    /// Two sequences could not be compared.
    #[error("array comparison failed: {0}")]
    ArrayComparison(String),

    /// Two records could not be compared.
    #[error("object comparison failed: {0}")]
    ObjectComparison(String),

    /// Two callables could not be compared.
    #[error("closure comparison failed: {0}")]
    ClosureComparison(String),

    /// JSON input could not be parsed.
    #[error("invalid json input: {0}")]
    Json(#[from] serde_json::Error),

    /// Evaluator configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FalsyError {
    /// Stable error code (F_ARRAY_CMP, F_JSON, …)
    pub fn code(&self) -> &'static str {
        match self {
            FalsyError::ArrayComparison(_) => "F_ARRAY_CMP",
            FalsyError::ObjectComparison(_) => "F_OBJECT_CMP",
            FalsyError::ClosureComparison(_) => "F_CLOSURE_CMP",
            FalsyError::Json(_) => "F_JSON",
            FalsyError::InvalidConfig(_) => "F_CONFIG",
        }
    }

    /// Sequence comparison error
    pub fn array_comparison(message: impl Into<String>) -> Self {
        FalsyError::ArrayComparison(message.into())
    }

    /// Record comparison error
    pub fn object_comparison(message: impl Into<String>) -> Self {
        FalsyError::ObjectComparison(message.into())
    }

    /// Callable comparison error
    pub fn closure_comparison(message: impl Into<String>) -> Self {
        FalsyError::ClosureComparison(message.into())
    }
}

pub type FalsyResult<T> = Result<T, FalsyError>;
