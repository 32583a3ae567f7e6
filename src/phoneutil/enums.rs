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

use std::{convert::Infallible, fmt, num::IntErrorKind, str::FromStr};

use strum::{AsRefStr, EnumIter, IntoStaticStr};

use super::{helper_constants::PLUS_SIGN, helper_functions::normalize_number};

/// Why a number was rejected for a country.
///
/// The string form (`number_length`, `mobile_start`, `no_match`) is stable and
/// meant to be used as a message key by whoever renders the error.
#[derive(
    Debug, EnumIter, AsRefStr, IntoStaticStr, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationReason {
    /// **Wrong length.**
    /// The digit count of the national number is not one of the lengths allowed
    /// for the country.
    NumberLength,
    /// **Not a mobile number.**
    /// A mobile number was required, but the national number does not start
    /// with any of the country's mobile prefixes.
    MobileStart,
    /// **No country.**
    /// No country record could be matched at all, so there were no rules to
    /// check the number against.
    NoMatch,
}

/// Selects the alphabetic form of a country identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaForm {
    Alpha2,
    Alpha3,
}

/// The country side of a phone number as supplied by a caller.
///
/// Raw input is turned into one of these by [`CountryHint::classify`], so the
/// validator itself never has to guess what kind of identifier it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CountryHint {
    /// A numeric calling code such as `41` (given as `"41"` or `"+41"`).
    CallingCode(u32),
    /// A two-letter code, upper-cased.
    Alpha2(String),
    /// A three-letter code, upper-cased.
    Alpha3(String),
    /// No usable country: the number is expected to carry its calling code.
    Unspecified,
}

impl CountryHint {
    /// Classifies a raw country argument by its shape.
    ///
    /// - empty → `Unspecified`
    /// - starts with `+` or consists of digits only → `CallingCode`; a code
    ///   without digits or equal to zero gives `Unspecified`, a code too large
    ///   for `u32` saturates to `u32::MAX` and so matches no country
    /// - two characters → `Alpha2`
    /// - three characters → `Alpha3`
    /// - anything else → `Unspecified`
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return CountryHint::Unspecified;
        }

        if raw.starts_with(PLUS_SIGN) || raw.bytes().all(|b| b.is_ascii_digit()) {
            return match normalize_number(raw).parse::<u32>() {
                Ok(0) => CountryHint::Unspecified,
                Ok(code) => CountryHint::CallingCode(code),
                // Too large to be a calling code, so it stays one that no country uses.
                Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                    CountryHint::CallingCode(u32::MAX)
                }
                Err(_) => CountryHint::Unspecified,
            };
        }

        match raw.chars().count() {
            2 => CountryHint::Alpha2(raw.to_uppercase()),
            3 => CountryHint::Alpha3(raw.to_uppercase()),
            _ => CountryHint::Unspecified,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, CountryHint::Unspecified)
    }
}

impl FromStr for CountryHint {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::classify(s))
    }
}

impl From<u32> for CountryHint {
    fn from(code: u32) -> Self {
        if code == 0 {
            CountryHint::Unspecified
        } else {
            CountryHint::CallingCode(code)
        }
    }
}

impl fmt::Display for CountryHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryHint::CallingCode(code) => write!(f, "+{code}"),
            CountryHint::Alpha2(code) | CountryHint::Alpha3(code) => f.write_str(code),
            CountryHint::Unspecified => Ok(()),
        }
    }
}
