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

//! The persisted shapes of a phone value.
//!
//! Three layouts are in circulation and all of them must stay readable:
//! - `(alpha2)-callingCode-nationalNumber`, the current one;
//! - `alpha2-nationalNumber`, where the calling code is derived from the country;
//! - `nationalNumber`, without any country information.

use super::helper_constants::STORED_FORMAT_SEPARATOR;
use super::helper_functions::build_internal_format;

/// The canonical `(alpha2, calling code, national number)` triple.
///
/// Any part may be empty when it could not be recovered from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredPhone {
    pub alpha2: String,
    pub calling_code: Option<u32>,
    pub number: String,
}

impl StoredPhone {
    pub fn new(alpha2: impl Into<String>, calling_code: u32, number: impl Into<String>) -> Self {
        Self {
            alpha2: alpha2.into(),
            calling_code: Some(calling_code),
            number: number.into(),
        }
    }

    /// True when alpha-2, calling code and number are all present.
    pub fn is_complete(&self) -> bool {
        !self.alpha2.is_empty() && self.calling_code.is_some() && !self.number.is_empty()
    }

    /// `(alpha2)-code-number`, or `None` while the calling code is unknown.
    pub fn to_internal_format(&self) -> Option<String> {
        self.calling_code
            .map(|code| build_internal_format(&self.alpha2, code, &self.number))
    }
}

/// A stored string split by its dash-separated segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoredShape<'a> {
    /// `nationalNumber`
    NumberOnly(&'a str),
    /// `alpha2-nationalNumber`
    CountryAndNumber { country: &'a str, number: &'a str },
    /// `(alpha2)-callingCode-nationalNumber`
    Internal {
        alpha2: &'a str,
        calling_code: &'a str,
        number: &'a str,
    },
    /// Four or more segments.
    Unrecognized,
}

impl<'a> StoredShape<'a> {
    pub(crate) fn split(raw: &'a str) -> Self {
        let segments = raw.split(STORED_FORMAT_SEPARATOR).collect::<Vec<_>>();
        match *segments.as_slice() {
            [number] => StoredShape::NumberOnly(number),
            [country, number] => StoredShape::CountryAndNumber { country, number },
            [alpha2, calling_code, number] => StoredShape::Internal {
                alpha2: alpha2.trim_start_matches('(').trim_end_matches(')'),
                calling_code,
                number,
            },
            _ => StoredShape::Unrecognized,
        }
    }
}
