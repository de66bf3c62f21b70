//! User record domain model

use serde::{Deserialize, Serialize};

/// Street line of a postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetAddress {
    pub number: i64,
    pub name: String,
}

/// One normalized directory entry
///
/// `full_name`, `phone_formatted` and `dob_formatted` are derived once when
/// the record is ingested and are never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Treated as the unique key of the record
    pub email: String,
    pub full_name: String,
    pub picture_url: String,
    pub city: String,
    pub state: String,
    pub street: StreetAddress,
    pub postcode: String,
    pub phone_formatted: String,
    pub dob_formatted: String,
}

impl UserRecord {
    /// "City, State" line shown on cards
    pub fn location_line(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Full postal address shown in the detail modal
    pub fn address_line(&self) -> String {
        format!(
            "{} {}, {}, {} {}",
            self.street.number, self.street.name, self.city, self.state, self.postcode
        )
    }
}
