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

use crate::facade::Falsy;
use crate::value::Value;

/// Returns `true` when every value is truthy and at least one value is
/// given.
///
/// ```
/// assert!(falsy::truthy([1, 2, 3]));
/// assert!(!falsy::truthy(Vec::<i32>::new()));
/// ```
pub fn truthy<I, V>(values: I) -> bool
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Falsy::from_values(values).is_truthy()
}

/// Exact negation of [`truthy`].
pub fn falsy<I, V>(values: I) -> bool
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Falsy::from_values(values).is_falsy()
}
