//! Directory store - the session's fetched record list
//!
//! Populated once by `initialize` and read-only afterwards. Lookups are
//! linear scans; the list holds a single API batch.

use crate::domain::result::{Error, Result};
use crate::domain::UserRecord;

/// Ordered, one-shot initialized list of directory records
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    records: Vec<UserRecord>,
    initialized: bool,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the store
    ///
    /// Only the first call takes effect; later calls return
    /// [`Error::AlreadyInitialized`] and leave the records untouched.
    pub fn initialize(&mut self, records: Vec<UserRecord>) -> Result<()> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }
        self.records = records;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// All records in API response order
    pub fn all(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the first record with this email
    pub fn index_of(&self, email: &str) -> Option<usize> {
        self.records.iter().position(|r| r.email == email)
    }

    pub fn at(&self, index: usize) -> Option<&UserRecord> {
        self.records.get(index)
    }

    pub fn get(&self, email: &str) -> Option<&UserRecord> {
        self.index_of(email).and_then(|i| self.at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StreetAddress;

    fn record(email: &str, name: &str) -> UserRecord {
        UserRecord {
            email: email.to_string(),
            full_name: name.to_string(),
            picture_url: String::new(),
            city: "Boise".to_string(),
            state: "Idaho".to_string(),
            street: StreetAddress {
                number: 1,
                name: "Main St".to_string(),
            },
            postcode: "83702".to_string(),
            phone_formatted: "(208) 555-0100".to_string(),
            dob_formatted: "1/1/1980".to_string(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = DirectoryStore::new();
        assert!(store.is_empty());
        assert!(!store.is_initialized());
        assert_eq!(store.index_of("a@example.com"), None);
    }

    #[test]
    fn test_lookups() {
        let mut store = DirectoryStore::new();
        store
            .initialize(vec![
                record("a@example.com", "Anna Smith"),
                record("b@example.com", "Ben Stone"),
            ])
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.index_of("b@example.com"), Some(1));
        assert_eq!(store.index_of("zed@example.com"), None);
        assert_eq!(store.at(0).unwrap().full_name, "Anna Smith");
        assert!(store.at(2).is_none());
        assert_eq!(store.get("a@example.com").unwrap().full_name, "Anna Smith");
    }

    #[test]
    fn test_second_initialize_rejected() {
        let mut store = DirectoryStore::new();
        store.initialize(vec![record("a@example.com", "Anna Smith")]).unwrap();

        let err = store.initialize(vec![record("b@example.com", "Ben Stone")]).unwrap_err();

        assert!(matches!(err, Error::AlreadyInitialized));
        assert_eq!(store.len(), 1);
        assert_eq!(store.at(0).unwrap().email, "a@example.com");
    }

    #[test]
    fn test_empty_batch_still_initializes() {
        let mut store = DirectoryStore::new();
        store.initialize(Vec::new()).unwrap();
        assert!(store.is_initialized());
        assert!(store.initialize(Vec::new()).is_err());
    }

    #[test]
    fn test_duplicate_email_resolves_to_first() {
        let mut store = DirectoryStore::new();
        store
            .initialize(vec![
                record("dup@example.com", "First"),
                record("dup@example.com", "Second"),
            ])
            .unwrap();
        assert_eq!(store.index_of("dup@example.com"), Some(0));
    }
}
