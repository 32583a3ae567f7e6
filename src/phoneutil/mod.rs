mod helper_constants;
pub(crate) mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phoneutil;
pub mod helper_types;
pub mod stored_format;

use std::sync::LazyLock;

pub use enums::{AlphaForm, CountryHint, ValidationReason};
pub use errors::{DatasetError, InvalidPhoneError};
pub use helper_functions::{normalize_number, parse_dataset};
pub use helper_types::{CountryOption, ParsedPhone};
pub use stored_format::StoredPhone;
use crate::phoneutil::phoneutil::PhoneUtil;

pub static PHONE_UTIL: LazyLock<PhoneUtil> = LazyLock::new(|| {
    PhoneUtil::new()
});
