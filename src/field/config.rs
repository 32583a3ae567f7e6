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

/// Settings of one phone field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    /// Only mobile numbers are accepted.
    pub require_mobile: bool,
    /// Country assumed for numbers stored without one. Any identifier form is
    /// accepted: alpha-2, alpha-3 or calling code.
    pub default_country: Option<String>,
    /// Label picker entries with country names instead of alpha-3 codes.
    pub full_country_names: bool,
    /// Submitted countries are replaced by the default country.
    pub force_country: bool,
    /// An empty value is rejected.
    pub required: bool,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_require_mobile(mut self, require_mobile: bool) -> Self {
        self.require_mobile = require_mobile;
        self
    }

    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }

    pub fn with_full_country_names(mut self, full_country_names: bool) -> Self {
        self.full_country_names = full_country_names;
        self
    }

    pub fn with_force_country(mut self, force_country: bool) -> Self {
        self.force_country = force_country;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
