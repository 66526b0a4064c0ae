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

/// Folds already-evaluated verdicts into one with logical AND.
///
/// Unlike `Iterator::all`, an empty input folds to `false`: nothing
/// present is never vacuously truthy.
///
/// The iterator is consumed lazily and stops at the first `false`, so
/// callers that map members to verdicts on the fly get short-circuiting
/// for free.
pub fn combine<I>(results: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    let mut results = results.into_iter().peekable();
    results.peek().is_some() && results.all(|r| r)
}
