// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

/// Strips the first of `prefixes` that the string starts with. Prefixes are
/// tried in order and at most one is removed; the string is returned
/// unchanged when none matches.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_first_cow_prefix<'a>(cow: Cow<'a, str>, prefixes: &[&str]) -> Cow<'a, str> {
    let Some(prefix) = prefixes.iter().find(|prefix| cow.starts_with(**prefix)) else {
        return cow;
    };
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(&s[prefix.len()..]),
        Cow::Owned(mut s) => {
            s.drain(0..prefix.len());
            Cow::Owned(s)
        }
    }
}

/// Drops leading zeros, keeping a single `0` for an all-zero input.
pub fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}
