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

//! Falsy - type-aware, recursive truthiness.
//!
//! Decides whether a whole set of heterogeneous values should be treated
//! as truthy, using one consistent rule table instead of any host
//! language's native coercion:
//!
//! - `Absent`, `false`, `0`, `0.0`, `""` and `"0"` are falsy
//! - sequences and records are truthy only when non-empty and every
//!   member is truthy
//! - callables are invoked and their result is evaluated
//! - a set of values is truthy only when non-empty and every value is
//!   truthy
//!
//! ```
//! use falsy::{falsy, record, seq, truthy, Falsy};
//!
//! assert!(falsy!(false, (), 0, 0.0, "0", seq![], seq![""], seq![false, ()]));
//! assert!(truthy!(true, 1, 0.1, "1", seq!["1"], seq![true]));
//!
//! let object = record! { "foo" => "bar" };
//! assert!(Falsy::from_values([&object]).is_truthy());
//! object.set("count", 0);
//! assert!(Falsy::from_values([&object]).is_falsy());
//! ```

#[macro_use]
mod macros;

pub mod combinator;
pub mod config;
pub mod convert;
pub mod display;
pub mod error;
pub mod evaluator;
pub mod facade;
pub mod functions;
pub mod rules;
pub mod value;

// Re-export commonly used types
pub use config::EvaluatorConfig;
pub use error::{FalsyError, FalsyResult};
pub use evaluator::{evaluate, Evaluator};
pub use facade::Falsy;
pub use rules::Atomic;
pub use functions::{falsy, truthy};
pub use value::{Callable, Key, Record, Sequence, Value};
