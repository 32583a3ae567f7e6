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

use thiserror::Error;

use super::enums::ValidationReason;

/// A rejected phone number together with every reason collected while
/// checking it.
///
/// Reasons keep the order in which they were first seen and never repeat, so
/// a caller may show only the first one or all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Invalid phone number: {}", join_reasons(.reasons))]
pub struct InvalidPhoneError {
    reasons: Vec<ValidationReason>,
}

impl InvalidPhoneError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reason: ValidationReason) {
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }

    pub fn reasons(&self) -> &[ValidationReason] {
        &self.reasons
    }

    pub fn first(&self) -> Option<ValidationReason> {
        self.reasons.first().copied()
    }

    pub fn contains(&self, reason: ValidationReason) -> bool {
        self.reasons.contains(&reason)
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Closes an accumulation: a failure with nothing recorded means no
    /// country was ever evaluated.
    pub(crate) fn or_no_match(mut self) -> Self {
        if self.reasons.is_empty() {
            self.reasons.push(ValidationReason::NoMatch);
        }
        self
    }
}

impl From<ValidationReason> for InvalidPhoneError {
    fn from(reason: ValidationReason) -> Self {
        Self { reasons: vec![reason] }
    }
}

fn join_reasons(reasons: &[ValidationReason]) -> String {
    reasons
        .iter()
        .map(|reason| reason.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, PartialEq, Error)]
pub enum DatasetError {
    #[error("Malformed country dataset: {0}")]
    Malformed(String),
    #[error("Duplicate alpha-2 code {0}")]
    DuplicateAlpha2(String),
    #[error("Duplicate alpha-3 code {0}")]
    DuplicateAlpha3(String),
    #[error("Invalid alphabetic country code '{0}'")]
    InvalidAlphaCode(String),
    #[error("Country {0} has no valid calling code")]
    InvalidCallingCode(String),
    #[error("Country {0} has no valid phone number lengths")]
    NoNumberLengths(String),
}
