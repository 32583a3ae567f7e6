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

use std::collections::{HashMap, hash_map::Entry};

use log::{trace, warn};

use crate::{
    interfaces::MatcherApi,
    phoneutil::{
        enums::{AlphaForm, CountryHint, ValidationReason},
        errors::{DatasetError, InvalidPhoneError},
        helper_constants::{
            IDD_PREFIX, MAX_CALLING_CODE, MAX_LENGTH_COUNTRY_CODE, MIN_LENGTH_FOR_WHOLE_NUMBER,
            PLUS_SIGN,
        },
        helper_functions::{
            self, is_alpha_code, load_compiled_dataset, normalize_number,
            prefix_number_with_calling_code, strip_international_prefix,
        },
        helper_types::{CountryOption, ParsedPhone},
        stored_format::{StoredPhone, StoredShape},
    },
    prefix_based_matcher::PrefixBasedMatcher,
    proto_gen::countrydata::{CountryDataCollection, CountryRecord},
    string_util::trim_leading_zeros,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidPhoneError>;

pub struct PhoneUtil {
    /// An API for the single-country rule check.
    matcher_api: Box<dyn MatcherApi>,

    /// Country records in declaration order. Never mutated after construction.
    records: Vec<CountryRecord>,

    /// Upper-cased alpha-2 code to index into `records`.
    alpha2_to_index: HashMap<String, usize>,

    /// Upper-cased alpha-3 code to index into `records`.
    alpha3_to_index: HashMap<String, usize>,

    /// A mapping from a calling code to the indices of every record using it,
    /// in declaration order. Members of the North American Numbering Plan all
    /// share code 1, Russia and Kazakhstan share 7. Sorted by calling code so
    /// it can be binary searched.
    calling_code_to_indices: Vec<(u32, Vec<usize>)>,
}

impl PhoneUtil {
    pub(crate) fn new() -> Self {
        match load_compiled_dataset().and_then(Self::new_for_dataset) {
            Err(err) => {
                let err_message = format!("Could not load compiled-in country data: {err}");
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(instance) => instance,
        }
    }

    /// Builds an instance over a caller-supplied dataset.
    ///
    /// Codes are upper-cased. Duplicated alphabetic codes, malformed codes,
    /// a calling code outside 1..=999 or an empty list of lengths are rejected.
    pub fn new_for_dataset(
        collection: CountryDataCollection,
    ) -> std::result::Result<Self, DatasetError> {
        let mut instance = Self {
            matcher_api: Box::new(PrefixBasedMatcher::new()),
            records: Vec::with_capacity(collection.country.len()),
            alpha2_to_index: HashMap::with_capacity(collection.country.len()),
            alpha3_to_index: HashMap::with_capacity(collection.country.len()),
            calling_code_to_indices: Default::default(),
        };
        let mut calling_code_to_indices = HashMap::<u32, Vec<usize>>::new();

        for mut record in collection.country {
            record.alpha2 = record.alpha2.trim().to_uppercase();
            record.alpha3 = record.alpha3.trim().to_uppercase();

            if !is_alpha_code(&record.alpha2, 2) {
                return Err(DatasetError::InvalidAlphaCode(record.alpha2));
            }
            if !is_alpha_code(&record.alpha3, 3) {
                return Err(DatasetError::InvalidAlphaCode(record.alpha3));
            }
            if record.calling_code == 0 || record.calling_code > MAX_CALLING_CODE {
                return Err(DatasetError::InvalidCallingCode(record.alpha2));
            }
            if record.phone_number_lengths.is_empty() {
                return Err(DatasetError::NoNumberLengths(record.alpha2));
            }

            let index = instance.records.len();
            match instance.alpha2_to_index.entry(record.alpha2.clone()) {
                Entry::Occupied(_) => return Err(DatasetError::DuplicateAlpha2(record.alpha2)),
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
            match instance.alpha3_to_index.entry(record.alpha3.clone()) {
                Entry::Occupied(_) => return Err(DatasetError::DuplicateAlpha3(record.alpha3)),
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
            calling_code_to_indices
                .entry(record.calling_code)
                .or_default()
                .push(index);

            instance.records.push(record);
        }

        instance
            .calling_code_to_indices
            .extend(calling_code_to_indices);
        // Sort all the pairs in ascending order according to calling code.
        instance
            .calling_code_to_indices
            .sort_by_key(|(code, _)| *code);
        Ok(instance)
    }

    /// All records in declaration order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct calling codes, ascending.
    pub fn supported_calling_codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.calling_code_to_indices.iter().map(|(code, _)| *code)
    }

    /// Every record using `calling_code`, in declaration order.
    pub fn by_calling_code(&self, calling_code: u32) -> Vec<&CountryRecord> {
        self.calling_code_to_indices
            .binary_search_by_key(&calling_code, |(code, _)| *code)
            .map(|position| {
                self.calling_code_to_indices[position]
                    .1
                    .iter()
                    .map(|index| &self.records[*index])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn by_alpha2(&self, alpha2: &str) -> Option<&CountryRecord> {
        self.alpha2_to_index
            .get(alpha2.trim().to_uppercase().as_str())
            .map(|index| &self.records[*index])
    }

    pub fn by_alpha3(&self, alpha3: &str) -> Option<&CountryRecord> {
        self.alpha3_to_index
            .get(alpha3.trim().to_uppercase().as_str())
            .map(|index| &self.records[*index])
    }

    pub fn alpha2_to_alpha3(&self, alpha2: &str) -> Option<&str> {
        self.by_alpha2(alpha2).map(|record| record.alpha3.as_str())
    }

    pub fn alpha3_to_alpha2(&self, alpha3: &str) -> Option<&str> {
        self.by_alpha3(alpha3).map(|record| record.alpha2.as_str())
    }

    /// Looks a country up by an alphabetic code of either form, dispatching
    /// on its length.
    fn by_alpha(&self, country: &str) -> Option<&CountryRecord> {
        let country = country.trim();
        match country.chars().count() {
            2 => self.by_alpha2(country),
            3 => self.by_alpha3(country),
            _ => None,
        }
    }

    /// Converts an alpha-2 code into its alpha-3 code and vice versa.
    pub fn swap_alpha_form(&self, country: &str) -> Option<&str> {
        let trimmed = country.trim();
        let swapped = match trimmed.chars().count() {
            2 => self.alpha2_to_alpha3(trimmed),
            3 => self.alpha3_to_alpha2(trimmed),
            _ => None,
        };
        if swapped.is_none() {
            warn!("Invalid or unknown country code ({}) provided.", country);
        }
        swapped
    }

    /// The calling code of a country given as alpha-2 or alpha-3.
    pub fn calling_code_for(&self, country: &str) -> Option<u32> {
        self.by_alpha(country)
            .map(|record| record.calling_code)
            .or_else(|| {
                warn!("Invalid or unknown country code ({}) provided.", country);
                None
            })
    }

    /// The alphabetic code of the first country, in declaration order, that
    /// uses `calling_code`.
    pub fn country_alpha_from_calling_code(
        &self,
        calling_code: u32,
        form: AlphaForm,
    ) -> Option<&str> {
        let record = self.by_calling_code(calling_code).into_iter().next()?;
        Some(match form {
            AlphaForm::Alpha2 => record.alpha2.as_str(),
            AlphaForm::Alpha3 => record.alpha3.as_str(),
        })
    }

    /// The full rules of a country given as a calling code (first country
    /// with that code), an alpha-2 or an alpha-3 code.
    pub fn country_rules_for(&self, country: &str) -> Option<&CountryRecord> {
        let record = match CountryHint::classify(country) {
            CountryHint::CallingCode(code) => self.by_calling_code(code).into_iter().next(),
            CountryHint::Alpha2(alpha2) => self.by_alpha2(&alpha2),
            CountryHint::Alpha3(alpha3) => self.by_alpha3(&alpha3),
            CountryHint::Unspecified => None,
        };
        if record.is_none() {
            warn!("Invalid or unknown country ({}) provided.", country);
        }
        record
    }

    /// Picker entries: the alpha-2 code as value and
    /// `<country name or alpha-3> (+<calling code>)` as label, sorted by label.
    pub fn country_options(&self, use_full_names: bool) -> Vec<CountryOption> {
        let mut options = self
            .records
            .iter()
            .map(|record| {
                let name = if use_full_names {
                    &record.country_name
                } else {
                    &record.alpha3
                };
                let mut buf = itoa::Buffer::new();
                let calling_code_str = buf.format(record.calling_code);
                CountryOption {
                    value: record.alpha2.clone(),
                    label: fast_cat::concat_str!(name, " (+", calling_code_str, ")"),
                }
            })
            .collect::<Vec<_>>();
        options.sort_by(|a, b| a.label.cmp(&b.label));
        options
    }

    fn candidates(&self, country_hint: &CountryHint) -> Vec<&CountryRecord> {
        match country_hint {
            CountryHint::CallingCode(code) => self.by_calling_code(*code),
            CountryHint::Alpha2(alpha2) => self.by_alpha2(alpha2).into_iter().collect(),
            CountryHint::Alpha3(alpha3) => self.by_alpha3(alpha3).into_iter().collect(),
            CountryHint::Unspecified => Vec::new(),
        }
    }

    /// Validates a national number for the hinted country.
    ///
    /// Every country matching the hint is tried in declaration order and the
    /// first one whose rules accept the number wins. On failure the error
    /// carries the reasons collected from all of them, or
    /// [`ValidationReason::NoMatch`] when there was no country to try.
    ///
    /// Without a country hint the number is expected to start with its
    /// calling code and is handed to [`Self::validate_whole_number`].
    pub fn validate(
        &self,
        country_hint: &CountryHint,
        national_number: &str,
        require_mobile: bool,
    ) -> Result<ParsedPhone<'_>> {
        let national_number = normalize_number(national_number);

        if country_hint.is_unspecified() {
            return self
                .validate_whole_number(&national_number, require_mobile)
                .map_err(InvalidPhoneError::from);
        }

        let mut reasons = InvalidPhoneError::new();
        for country in self.candidates(country_hint) {
            if self
                .matcher_api
                .match_country(&national_number, country, require_mobile, &mut reasons)
            {
                return Ok(ParsedPhone::new(country, national_number.into_owned()));
            }
        }

        trace!("Number '{national_number}' rejected for country '{country_hint}'");
        Err(reasons.or_no_match())
    }

    /// [`Self::validate`] with the country given as raw text, classified by
    /// [`CountryHint::classify`].
    pub fn validate_number_str(
        &self,
        country: &str,
        national_number: &str,
        require_mobile: bool,
    ) -> Result<ParsedPhone<'_>> {
        self.validate(&CountryHint::classify(country), national_number, require_mobile)
    }

    /// Same check as [`Self::validate`] when only the verdict is needed.
    pub fn is_valid_number(
        &self,
        country_hint: &CountryHint,
        national_number: &str,
        require_mobile: bool,
    ) -> bool {
        self.validate(country_hint, national_number, require_mobile)
            .is_ok()
    }

    /// Parses a string holding calling code and national number without any
    /// separator between them, e.g. `41791234567`.
    ///
    /// Leading zeros are dropped first, so `041791234567` reads as
    /// `41791234567`. Calling codes of one, two and three digits are then
    /// tried in that order and the first split that validates is returned, so
    /// a shorter code wins whenever both readings are valid.
    pub fn validate_whole_number(
        &self,
        phone_number: &str,
        require_mobile: bool,
    ) -> std::result::Result<ParsedPhone<'_>, ValidationReason> {
        let normalized = normalize_number(phone_number);
        let digits = trim_leading_zeros(&normalized);
        if digits.len() < MIN_LENGTH_FOR_WHOLE_NUMBER {
            trace!("Number '{digits}' is too short to hold a calling code");
            return Err(ValidationReason::NoMatch);
        }

        for code_length in 1..=MAX_LENGTH_COUNTRY_CODE {
            let (calling_code, national_number) = digits.split_at(code_length);
            let Ok(calling_code) = calling_code.parse::<u32>() else {
                continue;
            };

            match self.validate(
                &CountryHint::CallingCode(calling_code),
                national_number,
                require_mobile,
            ) {
                Ok(parsed) => {
                    trace!(
                        "Number '{digits}' split as +{calling_code} {national_number} ({})",
                        parsed.alpha2()
                    );
                    return Ok(parsed);
                }
                Err(err) => {
                    trace!("Number '{digits}' is not +{calling_code} {national_number}: {err}");
                }
            }
        }
        Err(ValidationReason::NoMatch)
    }

    /// Parses a number in international notation: `+41 79 123 45 67`,
    /// `0041791234567` or `41791234567`.
    ///
    /// One leading `+` or else one leading `00` is removed, formatting is
    /// dropped and the rest goes through [`Self::validate_whole_number`].
    pub fn parse_international_number(
        &self,
        phone_number: &str,
        require_mobile: bool,
    ) -> Option<ParsedPhone<'_>> {
        let stripped = strip_international_prefix(phone_number);
        let digits = normalize_number(&stripped);
        if digits.len() < MIN_LENGTH_FOR_WHOLE_NUMBER {
            return None;
        }

        let parsed = self.validate_whole_number(&digits, require_mobile).ok()?;
        (!parsed.alpha2().is_empty() && parsed.calling_code() != 0).then_some(parsed)
    }

    /// Builds the persisted `(alpha2)-code-number` form.
    pub fn build_internal_format(alpha2: &str, calling_code: u32, national_number: &str) -> String {
        helper_functions::build_internal_format(alpha2, calling_code, national_number)
    }

    /// Splits a persisted string by its dash-separated segments.
    ///
    /// - `(alpha2)-code-number` is taken as is;
    /// - `alpha2-number` gets the calling code of the country (alpha-3 is
    ///   accepted as well);
    /// - `number` gets `default_country` and its calling code.
    ///
    /// Any other shape gives an empty value. No validation is done here.
    pub fn data_from_string(&self, stored: &str, default_country: Option<&str>) -> StoredPhone {
        match StoredShape::split(stored) {
            StoredShape::NumberOnly(number) => {
                let alpha2 = default_country.unwrap_or_default().to_owned();
                let calling_code = if alpha2.is_empty() {
                    None
                } else {
                    self.calling_code_for(&alpha2)
                };
                StoredPhone {
                    alpha2,
                    calling_code,
                    number: number.to_owned(),
                }
            }
            StoredShape::CountryAndNumber { country, number } => StoredPhone {
                alpha2: country.to_owned(),
                calling_code: self.calling_code_for(country),
                number: number.to_owned(),
            },
            StoredShape::Internal {
                alpha2,
                calling_code,
                number,
            } => StoredPhone {
                alpha2: alpha2.to_owned(),
                calling_code: calling_code.trim().parse().ok(),
                number: number.to_owned(),
            },
            StoredShape::Unrecognized => StoredPhone::default(),
        }
    }

    /// Reads a stored or imported value in any known shape.
    ///
    /// The segment parser runs first. When it finds a number but no calling
    /// code, or the input starts with `+` or `00`, the value is parsed as an
    /// international number instead, keeping the segment result if that fails.
    pub fn resolve_stored(&self, stored: &str, default_country: Option<&str>) -> StoredPhone {
        let resolved = self.data_from_string(stored, default_country);

        let trimmed = stored.trim();
        let looks_international = trimmed.starts_with(PLUS_SIGN) || trimmed.starts_with(IDD_PREFIX);
        let lacks_country = !resolved.number.is_empty() && resolved.calling_code.is_none();

        if looks_international || lacks_country {
            if let Some(parsed) = self.parse_international_number(stored, false) {
                return parsed.to_stored();
            }
        }
        resolved
    }

    /// Text shown for a stored value: `+<code><number>` without the
    /// national number's leading zeros when the country is known, the bare
    /// number otherwise. Values already starting with `+` are kept verbatim.
    pub fn display_stored(&self, stored: &str, default_country: Option<&str>) -> String {
        let resolved = self.resolve_stored(stored, default_country);

        if resolved.number.is_empty() || stored.starts_with(PLUS_SIGN) {
            return stored.to_owned();
        }

        match resolved.calling_code {
            Some(calling_code) => {
                let digits = normalize_number(&resolved.number);
                prefix_number_with_calling_code(calling_code, trim_leading_zeros(&digits))
            }
            None => resolved.number,
        }
    }
}
