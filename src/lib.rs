mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod phoneutil;
mod prefix_based_matcher;
pub mod field;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use phoneutil::{
    AlphaForm, CountryHint, CountryOption, DatasetError, InvalidPhoneError, ParsedPhone,
    PHONE_UTIL, StoredPhone, ValidationReason, normalize_number, parse_dataset,
    phoneutil::PhoneUtil,
};
pub use proto_gen::countrydata::{CountryDataCollection, CountryRecord};
