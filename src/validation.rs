use crate::error::{ShopError, ShopResult};
use crate::model::Address;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ShopResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ShopError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trims every address part. An address whose parts are all blank is treated
/// as no address at all.
pub fn normalize_address(address: Option<Address>) -> Option<Address> {
    let address = address?;
    let city = trim_optional(Some(address.city.as_str()));
    let street = trim_optional(Some(address.street.as_str()));
    let zipcode = trim_optional(Some(address.zipcode.as_str()));
    Address::from_columns(city, street, zipcode)
}
