use crate::{phoneutil::errors::InvalidPhoneError, proto_gen::countrydata::CountryRecord};

/// Internal rule-matching API used to isolate the single-country check from
/// the candidate search and allow different implementations to be swapped
/// in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) satisfies the rules of `country`. Every failed rule is
    /// recorded in `reasons`, even after the outcome is already known.
    fn match_country(
        &self,
        national_number: &str,
        country: &CountryRecord,
        require_mobile: bool,
        reasons: &mut InvalidPhoneError,
    ) -> bool;
}
