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


use crate::{PHONE_UTIL, PhoneUtil, parse_dataset};

/// Calling codes 8, 88 (twice) and 889, so every calling code is a numeric
/// prefix of the next one.
const TEST_COUNTRY_DATA: &str = include_str!("../../resources/test_country_data.textproto");

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

/// The engine over the compiled-in dataset.
fn get_phone_util() -> &'static PhoneUtil {
    init_logging();
    &PHONE_UTIL
}

/// The engine over the small overlapping-codes dataset.
fn get_test_phone_util() -> PhoneUtil {
    init_logging();
    let collection = parse_dataset(TEST_COUNTRY_DATA).expect("Test data should be valid");
    PhoneUtil::new_for_dataset(collection).expect("Test data should be consistent")
}
