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

/// Returns `true` when every argument is truthy.
///
/// Arguments may be of different types; each one only needs to convert
/// into a [`Value`](crate::Value). With no arguments the result is `false`.
///
/// ```
/// use falsy::truthy;
///
/// assert!(truthy!(true, 1, 0.1, "1"));
/// assert!(!truthy!());
/// ```
#[macro_export]
macro_rules! truthy {
    ($($v:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = $crate::Falsy::new();
        $(set.push($v);)*
        set.is_truthy()
    }};
}

/// Exact negation of [`truthy!`].
///
/// ```
/// use falsy::falsy;
///
/// assert!(falsy!(false, (), 0, 0.0, "0"));
/// assert!(falsy!());
/// ```
#[macro_export]
macro_rules! falsy {
    ($($v:expr),* $(,)?) => {
        !$crate::truthy!($($v),*)
    };
}

/// Builds a [`Sequence`](crate::Sequence).
///
/// `seq![a, b]` assigns sequential keys; `seq!{"k" => v, 1 => w}` uses
/// explicit keys.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut s = $crate::Sequence::new();
        $(s.insert($k, $v);)+
        s
    }};
    ($($v:expr),+ $(,)?) => {{
        let mut s = $crate::Sequence::new();
        $(s.push($v);)+
        s
    }};
}

/// Builds a [`Record`](crate::Record) from `name => value` pairs.
#[macro_export]
macro_rules! record {
    ($($k:expr => $v:expr),* $(,)?) => {{
        let r = $crate::Record::new();
        $(r.set($k, $v);)*
        r
    }};
}

#[cfg(test)]
mod tests {
    use crate::value::{Key, Value};

    #[test]
    fn seq_macro_forms() {
        assert!(seq![].is_empty());
        assert_eq!(seq![1, 2, 3].len(), 3);

        let keyed = seq! { "key" => 1, 7 => 2 };
        assert!(matches!(keyed.get(&Key::Index(7)), Some(Value::Integer(2))));
    }

    #[test]
    fn record_macro_sets_fields() {
        let r = record! { "foo" => "bar", "n" => 1 };
        assert_eq!(r.len(), 2);
        assert!(record! {}.is_empty());
    }

    #[test]
    fn variadic_macros() {
        assert!(truthy!(true, 1, "x", seq![true]));
        assert!(falsy!(true, seq![]));
        assert!(!truthy!());
        assert!(falsy!());
    }
}
