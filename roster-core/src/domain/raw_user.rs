//! Raw user payload as returned by the randomuser.me API
//!
//! Only the fields the directory displays are modelled; everything else in
//! the response is ignored by serde.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Top-level API response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RandomUserResponse {
    pub results: Vec<RawUser>,
}

/// One entry of `results`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawUser {
    pub name: RawName,
    pub dob: RawDob,
    pub phone: String,
    pub email: String,
    pub picture: RawPicture,
    pub location: RawLocation,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawDob {
    /// ISO 8601 timestamp, e.g. `1990-05-03T00:00:00.000Z`
    pub date: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPicture {
    pub large: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawLocation {
    pub city: String,
    pub state: String,
    pub street: RawStreet,
    /// API returns a number for US records and a string elsewhere
    #[serde(deserialize_with = "deserialize_postcode")]
    pub postcode: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawStreet {
    pub number: i64,
    pub name: String,
}

/// Deserialize postcode that can be number or string
fn deserialize_postcode<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: JsonValue = Deserialize::deserialize(deserializer)?;
    match value {
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::String(s) => Ok(s),
        _ => Err(D::Error::custom("expected number or string for postcode")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [{
            "gender": "female",
            "name": { "title": "Ms", "first": "Anna", "last": "Smith" },
            "location": {
                "street": { "number": 4821, "name": "Oak Lawn Ave" },
                "city": "Austin",
                "state": "Texas",
                "country": "United States",
                "postcode": 73301
            },
            "email": "anna.smith@example.com",
            "dob": { "date": "1990-05-03T00:00:00.000Z", "age": 34 },
            "phone": "(512)-555-0187",
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/1.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
            }
        }],
        "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn test_parse_api_response() {
        let response: RandomUserResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.results.len(), 1);
        let user = &response.results[0];
        assert_eq!(user.name.first, "Anna");
        assert_eq!(user.location.street.number, 4821);
        assert_eq!(user.location.postcode, "73301");
    }

    #[test]
    fn test_string_postcode() {
        let json = SAMPLE.replace("73301", "\"T2N 1N4\"");
        let response: RandomUserResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.results[0].location.postcode, "T2N 1N4");
    }
}
