//! Directory session - the fetch lifecycle and the view state around it
//!
//! A session starts `Loading`, performs the one fetch, and settles into
//! either `Ready` or `Failed`. It never leaves those states again.

use crate::domain::result::{Error, Result};
use crate::domain::RawUser;
use crate::ports::{FetchRequest, UserSource};
use crate::services::directory::DirectoryStore;
use crate::services::normalize::normalize_users;
use crate::services::render::{render_failure, GridView, ModalView};
use crate::services::router::{DirectoryEvent, EventRouter, ViewUpdate};
use crate::services::search::SearchMode;

/// Where the session is in its single fetch
#[derive(Debug, Clone, Default)]
pub enum DirectoryLifecycle {
    #[default]
    Loading,
    Ready(DirectoryStore),
    /// Human-readable reason the fetch failed
    Failed(String),
}

impl DirectoryLifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, DirectoryLifecycle::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DirectoryLifecycle::Ready(_))
    }

    pub fn store(&self) -> Option<&DirectoryStore> {
        match self {
            DirectoryLifecycle::Ready(store) => Some(store),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct DirectorySession {
    lifecycle: DirectoryLifecycle,
    router: EventRouter,
}

impl DirectorySession {
    pub fn new(search_mode: SearchMode) -> Self {
        Self {
            lifecycle: DirectoryLifecycle::Loading,
            router: EventRouter::new(search_mode),
        }
    }

    pub fn lifecycle(&self) -> &DirectoryLifecycle {
        &self.lifecycle
    }

    pub fn store(&self) -> Option<&DirectoryStore> {
        self.lifecycle.store()
    }

    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    /// Run the fetch and settle the lifecycle
    ///
    /// On failure the session moves to `Failed` and the error is returned as
    /// well, so the caller can report it. Calling this on a settled session
    /// returns [`Error::AlreadyInitialized`] without fetching.
    pub async fn load(&mut self, source: &dyn UserSource, request: &FetchRequest) -> Result<()> {
        if !self.lifecycle.is_loading() {
            return Err(Error::AlreadyInitialized);
        }
        let outcome = source.fetch_users(request).await;
        self.complete(outcome)
    }

    /// Settle the lifecycle from a fetch outcome
    pub fn complete(&mut self, outcome: Result<Vec<RawUser>>) -> Result<()> {
        if !self.lifecycle.is_loading() {
            return Err(Error::AlreadyInitialized);
        }

        match outcome.and_then(|raw| normalize_users(&raw)) {
            Ok(records) => {
                let mut store = DirectoryStore::new();
                store.initialize(records)?;
                self.lifecycle = DirectoryLifecycle::Ready(store);
                Ok(())
            }
            Err(e) => {
                self.lifecycle = DirectoryLifecycle::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Whether the search control should exist
    pub fn search_enabled(&self) -> bool {
        self.lifecycle.is_ready()
    }

    /// What the grid region shows right now
    pub fn grid(&self) -> GridView {
        match &self.lifecycle {
            DirectoryLifecycle::Loading => GridView::Loading,
            DirectoryLifecycle::Failed(message) => render_failure(message),
            // The applied query compiled when it was accepted
            DirectoryLifecycle::Ready(store) => self
                .router
                .current_grid(store)
                .unwrap_or_else(|_| GridView::Cards(Vec::new())),
        }
    }

    /// What the modal shows right now, if open
    pub fn modal(&self) -> Option<ModalView> {
        self.store().and_then(|store| self.router.current_modal(store))
    }

    /// Dispatch a UI event
    pub fn handle(&mut self, event: DirectoryEvent) -> Result<ViewUpdate> {
        self.router.handle(&self.lifecycle, event)
    }
}
