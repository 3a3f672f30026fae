use serde::{Deserialize, Serialize};

/// A postal address, stored inline with the record that embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

impl Address {
    pub fn new(city: impl Into<String>, street: impl Into<String>, zipcode: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            zipcode: zipcode.into(),
        }
    }

    /// Rebuild an address from its flattened columns. All three NULL means
    /// no address was stored.
    pub fn from_columns(
        city: Option<String>,
        street: Option<String>,
        zipcode: Option<String>,
    ) -> Option<Self> {
        if city.is_none() && street.is_none() && zipcode.is_none() {
            return None;
        }
        Some(Self {
            city: city.unwrap_or_default(),
            street: street.unwrap_or_default(),
            zipcode: zipcode.unwrap_or_default(),
        })
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} ({})", self.street, self.city, self.zipcode)
    }
}
