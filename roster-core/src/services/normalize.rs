//! Data normalizer - raw API users to directory records
//!
//! Runs exactly once per record, when the fetched batch is ingested.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::domain::result::{Error, Result};
use crate::domain::{RawUser, StreetAddress, UserRecord};

/// Normalize a whole batch, preserving response order
pub fn normalize_users(raw_users: &[RawUser]) -> Result<Vec<UserRecord>> {
    raw_users.iter().map(normalize_user).collect()
}

/// Normalize a single raw user
pub fn normalize_user(raw: &RawUser) -> Result<UserRecord> {
    Ok(UserRecord {
        email: raw.email.clone(),
        full_name: full_name(&raw.name.first, &raw.name.last),
        picture_url: raw.picture.large.clone(),
        city: raw.location.city.clone(),
        state: raw.location.state.clone(),
        street: StreetAddress {
            number: raw.location.street.number,
            name: raw.location.street.name.clone(),
        },
        postcode: raw.location.postcode.clone(),
        phone_formatted: format_phone(&raw.phone),
        dob_formatted: format_dob(&raw.dob.date)?,
    })
}

/// First and last name joined by a single space, casing untouched
pub fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first, last)
}

/// Replace only the first hyphen with a space
///
/// `(512)-555-0187` becomes `(512) 555-0187`; later hyphens are kept.
pub fn format_phone(phone: &str) -> String {
    phone.replacen('-', " ", 1)
}

/// Render an ISO 8601 birth timestamp as en-US `M/D/YYYY`
///
/// The calendar date is taken in UTC so the output does not depend on the
/// machine's timezone.
pub fn format_dob(iso: &str) -> Result<String> {
    let date = parse_date(iso)
        .ok_or_else(|| Error::Normalize(format!("Invalid birth date: {}", iso)))?;
    Ok(format!("{}/{}/{}", date.month(), date.day(), date.year()))
}

fn parse_date(iso: &str) -> Option<NaiveDate> {
    let trimmed = iso.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
