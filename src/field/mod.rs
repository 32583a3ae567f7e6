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

//! Phone values as a form field sees them: a country picker next to a
//! number box on input, and one persisted string in storage.

mod config;

pub use config::FieldConfig;

use log::trace;

use crate::{
    CountryHint, CountryOption, InvalidPhoneError, PHONE_UTIL, StoredPhone,
    phoneutil::{AlphaForm, normalize_number, phoneutil::PhoneUtil},
};

/// A submitted phone value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput<'a> {
    /// Country picker value and number box, as sent by a form.
    Structured { country: &'a str, number: &'a str },
    /// One string, as found in an import file: international notation or
    /// one of the persisted layouts.
    Raw(&'a str),
}

pub struct PhoneField<'a> {
    util: &'a PhoneUtil,
    config: FieldConfig,
}

impl PhoneField<'static> {
    /// A field backed by the compiled-in dataset.
    pub fn with_config(config: FieldConfig) -> Self {
        Self::new(&PHONE_UTIL, config)
    }
}

impl<'a> PhoneField<'a> {
    pub fn new(util: &'a PhoneUtil, config: FieldConfig) -> Self {
        Self { util, config }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The configured default country as a known alpha-2 code.
    ///
    /// An alpha-3 code is swapped, a calling code resolves to the first
    /// country using it.
    pub fn resolve_default_country(&self) -> Option<&'a str> {
        let default_country = self.config.default_country.as_deref()?;
        match CountryHint::classify(default_country) {
            CountryHint::CallingCode(code) => self
                .util
                .country_alpha_from_calling_code(code, AlphaForm::Alpha2),
            CountryHint::Alpha2(alpha2) => self
                .util
                .by_alpha2(&alpha2)
                .map(|record| record.alpha2.as_str()),
            CountryHint::Alpha3(alpha3) => self.util.alpha3_to_alpha2(&alpha3),
            CountryHint::Unspecified => None,
        }
    }

    /// Entries for the country picker, sorted by label.
    pub fn country_options(&self) -> Vec<CountryOption> {
        self.util.country_options(self.config.full_country_names)
    }

    /// Reads a persisted value, see [`PhoneUtil::resolve_stored`].
    pub fn load(&self, stored: &str) -> StoredPhone {
        self.util
            .resolve_stored(stored, self.resolve_default_country())
    }

    /// Text to show for a persisted value, see [`PhoneUtil::display_stored`].
    pub fn display(&self, stored: &str) -> String {
        self.util
            .display_stored(stored, self.resolve_default_country())
    }

    fn effective_country<'b>(&self, submitted: &'b str) -> &'b str
    where
        'a: 'b,
    {
        if self.config.force_country {
            if let Some(forced) = self.resolve_default_country() {
                return forced;
            }
        }
        submitted
    }

    /// Turns a submitted value into the string to persist.
    ///
    /// Returns `(alpha2)-code-number` for an acceptable number and an empty
    /// string otherwise, so invalid data is never stored.
    pub fn prepare_for_storage(&self, input: FieldInput<'_>) -> String {
        let require_mobile = self.config.require_mobile;

        match input {
            FieldInput::Structured { country, number } => {
                if number.trim().is_empty() {
                    return String::new();
                }
                let country = self.effective_country(country);
                self.util
                    .validate_number_str(country, number, require_mobile)
                    .map(|parsed| parsed.internal_format())
                    .unwrap_or_default()
            }
            FieldInput::Raw(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return String::new();
                }

                // International notation is the most common import format.
                if let Some(parsed) = self.util.parse_international_number(raw, require_mobile) {
                    return parsed.internal_format();
                }

                let stored = self
                    .util
                    .data_from_string(raw, self.resolve_default_country());
                if !stored.is_complete() {
                    trace!("Could not read '{raw}' as a phone number");
                    return String::new();
                }
                match self
                    .util
                    .validate_number_str(&stored.alpha2, &stored.number, require_mobile)
                {
                    Ok(parsed) => parsed.internal_format(),
                    Err(err) => {
                        trace!("Rejected '{raw}': {err}");
                        String::new()
                    }
                }
            }
        }
    }

    /// Validates a submitted value.
    ///
    /// An empty value is accepted as `Ok(None)` unless the field is required.
    /// A non-empty one must validate for its country; the accepted triple is
    /// returned so the caller can persist it or check it for uniqueness.
    pub fn validate_submission(
        &self,
        input: FieldInput<'_>,
    ) -> Result<Option<StoredPhone>, InvalidPhoneError> {
        let require_mobile = self.config.require_mobile;

        let submitted = match input {
            FieldInput::Raw(raw) => {
                let raw = raw.trim();
                match self.util.parse_international_number(raw, require_mobile) {
                    Some(parsed) => parsed.to_stored(),
                    None => self
                        .util
                        .data_from_string(raw, self.resolve_default_country()),
                }
            }
            FieldInput::Structured { country, number } => {
                let country = self.effective_country(country);
                StoredPhone {
                    alpha2: country.to_owned(),
                    calling_code: self.util.calling_code_for(country),
                    number: number.trim().to_owned(),
                }
            }
        };

        if submitted.number.is_empty() && !self.config.required {
            return Ok(None);
        }

        let parsed = self.util.validate_number_str(
            &submitted.alpha2,
            &submitted.number,
            require_mobile,
        )?;
        Ok(Some(parsed.to_stored()))
    }

    /// Splits a blended string such as `41791234567` into picker value and
    /// number box content. Falls back to the raw string in the number box.
    pub fn form_defaults(&self, raw: &str) -> (Option<String>, String) {
        match self.util.validate_whole_number(raw, true) {
            Ok(parsed) => (Some(parsed.alpha2().to_owned()), parsed.number().to_owned()),
            Err(_) => (None, raw.to_owned()),
        }
    }

    /// Calling code digits followed by the national number digits, e.g.
    /// `41791234567`. `None` for an unknown country.
    pub fn combined_digits(&self, country: &str, number: &str) -> Option<String> {
        let calling_code = self.util.calling_code_for(country)?;
        let mut buf = itoa::Buffer::new();
        let calling_code_str = buf.format(calling_code);
        let digits = normalize_number(number);

        Some(fast_cat::concat_str!(calling_code_str, &digits))
    }

    /// Keeps the entries whose value is a valid mobile number in blended
    /// form, e.g. a user's phone fields keyed by field name.
    pub fn filter_valid_numbers<K, V, I>(&self, numbers: I) -> Vec<(K, V)>
    where
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        numbers
            .into_iter()
            .filter(|(_, value)| self.util.validate_whole_number(value.as_ref(), true).is_ok())
            .collect()
    }
}
