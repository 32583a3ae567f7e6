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

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::{
    proto_gen::countrydata::CountryDataCollection,
    string_util::strip_first_cow_prefix,
};

use super::{
    errors::DatasetError,
    helper_constants::{COUNTRY_DATA, IDD_PREFIX, NON_DIGITS, PLUS_SIGN},
};

static NON_DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NON_DIGITS).expect("Invalid constant pattern!"));

/// Loads the dataset compiled into the library.
pub(super) fn load_compiled_dataset() -> Result<CountryDataCollection, DatasetError> {
    parse_dataset(COUNTRY_DATA)
}

/// Parses a dataset written in protobuf text format.
pub fn parse_dataset(text: &str) -> Result<CountryDataCollection, DatasetError> {
    protobuf::text_format::parse_from_str::<CountryDataCollection>(text)
        .map_err(|err| DatasetError::Malformed(err.to_string()))
}

/// Removes every character that is not an ASCII digit.
///
/// Returns the input borrowed when it already holds digits only, so
/// normalizing twice never allocates.
pub fn normalize_number(phone_number: &str) -> Cow<'_, str> {
    NON_DIGITS_PATTERN.replace_all(phone_number, "")
}

/// Removes one leading `+`, or else one leading `00`, after trimming.
pub(super) fn strip_international_prefix(phone_number: &str) -> Cow<'_, str> {
    strip_first_cow_prefix(Cow::Borrowed(phone_number.trim()), &[PLUS_SIGN, IDD_PREFIX])
}

/// Builds `+<calling code><national number>`.
pub(super) fn prefix_number_with_calling_code(calling_code: u32, national_number: &str) -> String {
    let mut buf = itoa::Buffer::new();
    let calling_code_str = buf.format(calling_code);

    fast_cat::concat_str!(PLUS_SIGN, calling_code_str, national_number)
}

/// Builds the persisted `(alpha2)-code-number` form.
pub(super) fn build_internal_format(alpha2: &str, calling_code: u32, national_number: &str) -> String {
    let mut buf = itoa::Buffer::new();
    let calling_code_str = buf.format(calling_code);

    fast_cat::concat_str!("(", alpha2, ")-", calling_code_str, "-", national_number)
}

/// Returns true when `text` holds exactly `len` ASCII letters.
pub(super) fn is_alpha_code(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_alphabetic())
}
