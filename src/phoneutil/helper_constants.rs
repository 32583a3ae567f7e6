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

/// The compiled-in dataset, protobuf text format.
pub const COUNTRY_DATA: &'static str = include_str!("../../resources/country_data.textproto");

/// No calling code plus national number combination is shorter than this.
pub const MIN_LENGTH_FOR_WHOLE_NUMBER: usize = 4;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
pub const MAX_CALLING_CODE: u32 = 999;

pub const PLUS_SIGN: &'static str = "+";
/// International dialing prefix used in most of the world instead of `+`.
pub const IDD_PREFIX: &'static str = "00";

// Separator of the persisted "(alpha2)-code-number" string.
pub const STORED_FORMAT_SEPARATOR: char = '-';

// Matches everything that is not an ASCII digit.
pub const NON_DIGITS: &'static str = r"[^0-9]";
