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


use log::trace;

use crate::{
    interfaces,
    phoneutil::{enums::ValidationReason, errors::InvalidPhoneError},
    proto_gen::countrydata::CountryRecord,
};

/// Checks the number length against the allowed lengths and, for mobile
/// numbers, the leading digits against the mobile prefixes.
#[derive(Debug, Default)]
pub struct PrefixBasedMatcher;

impl PrefixBasedMatcher {
    pub fn new() -> Self {
        Self
    }

    fn has_valid_length(national_number: &str, country: &CountryRecord) -> bool {
        let Ok(length) = u32::try_from(national_number.len()) else {
            return false;
        };
        country.phone_number_lengths.contains(&length)
    }

    fn has_mobile_prefix(national_number: &str, country: &CountryRecord) -> bool {
        country
            .mobile_begin_with
            .iter()
            .any(|prefix| national_number.starts_with(prefix.as_str()))
    }
}

impl interfaces::MatcherApi for PrefixBasedMatcher {
    fn match_country(
        &self,
        national_number: &str,
        country: &CountryRecord,
        require_mobile: bool,
        reasons: &mut InvalidPhoneError,
    ) -> bool {
        let length_ok = Self::has_valid_length(national_number, country);
        if !length_ok {
            trace!(
                "Number '{national_number}' has {} digits, not allowed for {}",
                national_number.len(),
                country.alpha2
            );
            reasons.push(ValidationReason::NumberLength);
        }

        // Evaluated even when the length is already wrong, so the caller
        // learns about every broken rule.
        let prefix_ok = !require_mobile || Self::has_mobile_prefix(national_number, country);
        if !prefix_ok {
            trace!(
                "Number '{national_number}' does not start with a mobile prefix of {}",
                country.alpha2
            );
            reasons.push(ValidationReason::MobileStart);
        }

        length_ok && prefix_ok
    }
}
