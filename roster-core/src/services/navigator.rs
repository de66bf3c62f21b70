//! Modal navigator - which record the detail modal shows
//!
//! The modal is either `Closed` or `Open` on one record, identified by email.
//! Prev/next walk the full directory order, not the filtered card grid.

use serde::Serialize;

use crate::domain::result::{Direction, Error, Result};
use crate::domain::UserRecord;
use crate::services::directory::DirectoryStore;

/// Modal state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open { email: String },
}

/// Whether a record at `index` has a predecessor
pub fn can_go_prev(index: usize) -> bool {
    index > 0
}

/// Whether a record at `index` has a successor in a list of `len`
pub fn can_go_next(index: usize, len: usize) -> bool {
    index + 1 < len
}

#[derive(Debug, Clone, Default)]
pub struct ModalNavigator {
    state: ModalState,
}

impl ModalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Open (or re-target) the modal on `email`
    pub fn select<'s>(&mut self, store: &'s DirectoryStore, email: &str) -> Result<&'s UserRecord> {
        let record = store
            .get(email)
            .ok_or_else(|| Error::not_found(format!("No directory entry for {}", email)))?;
        self.state = ModalState::Open {
            email: record.email.clone(),
        };
        Ok(record)
    }

    /// Close the modal; closing a closed modal does nothing
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Index of the open record in the directory
    pub fn position(&self, store: &DirectoryStore) -> Option<usize> {
        match &self.state {
            ModalState::Open { email } => store.index_of(email),
            ModalState::Closed => None,
        }
    }

    pub fn current<'s>(&self, store: &'s DirectoryStore) -> Option<&'s UserRecord> {
        self.position(store).and_then(|i| store.at(i))
    }

    pub fn can_go_prev(&self, store: &DirectoryStore) -> bool {
        self.position(store).is_some_and(can_go_prev)
    }

    pub fn can_go_next(&self, store: &DirectoryStore) -> bool {
        self.position(store)
            .is_some_and(|i| can_go_next(i, store.len()))
    }

    pub fn prev<'s>(&mut self, store: &'s DirectoryStore) -> Result<&'s UserRecord> {
        self.step(store, Direction::Prev)
    }

    pub fn next<'s>(&mut self, store: &'s DirectoryStore) -> Result<&'s UserRecord> {
        self.step(store, Direction::Next)
    }

    /// Move one record in `direction`; at the edge the state is left as is
    fn step<'s>(
        &mut self,
        store: &'s DirectoryStore,
        direction: Direction,
    ) -> Result<&'s UserRecord> {
        let index = self
            .position(store)
            .ok_or_else(|| Error::not_found("No record is open"))?;

        let target = match direction {
            Direction::Prev if can_go_prev(index) => index - 1,
            Direction::Next if can_go_next(index, store.len()) => index + 1,
            _ => return Err(Error::NavigationOutOfRange(direction)),
        };

        let record = store
            .at(target)
            .ok_or(Error::NavigationOutOfRange(direction))?;
        self.state = ModalState::Open {
            email: record.email.clone(),
        };
        Ok(record)
    }
}
