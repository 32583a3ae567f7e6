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

use crate::proto_gen::countrydata::CountryRecord;

use super::{
    helper_functions::{build_internal_format, prefix_number_with_calling_code},
    stored_format::StoredPhone,
};

/// A number that passed validation, tied to the country it matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPhone<'a> {
    country: &'a CountryRecord,
    /// National number, digits only. Leading zeros are kept.
    number: String,
}

impl<'a> ParsedPhone<'a> {
    pub fn new(country: &'a CountryRecord, number: String) -> Self {
        Self { country, number }
    }

    /// The matched country record.
    pub fn country(&self) -> &'a CountryRecord {
        self.country
    }

    pub fn alpha2(&self) -> &'a str {
        &self.country.alpha2
    }

    pub fn alpha3(&self) -> &'a str {
        &self.country.alpha3
    }

    pub fn country_name(&self) -> &'a str {
        &self.country.country_name
    }

    pub fn calling_code(&self) -> u32 {
        self.country.calling_code
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// `+<calling code><national number>`, e.g. `+41791234567`.
    pub fn display_format(&self) -> String {
        prefix_number_with_calling_code(self.calling_code(), &self.number)
    }

    /// `(alpha2)-<calling code>-<national number>`, e.g. `(CH)-41-791234567`.
    pub fn internal_format(&self) -> String {
        build_internal_format(self.alpha2(), self.calling_code(), &self.number)
    }

    pub fn to_stored(&self) -> StoredPhone {
        StoredPhone {
            alpha2: self.alpha2().to_owned(),
            calling_code: Some(self.calling_code()),
            number: self.number.clone(),
        }
    }
}

/// One entry of a country picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    /// Alpha-2 code, the submitted value.
    pub value: String,
    /// Country name or alpha-3 code followed by ` (+<calling code>)`.
    pub label: String,
}
