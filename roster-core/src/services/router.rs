//! Event router - maps UI events to exactly one view update
//!
//! Holds the derived view state (current query, modal navigator) and
//! recomputes the affected region from the directory on every event.

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::services::directory::DirectoryStore;
use crate::services::navigator::ModalNavigator;
use crate::services::render::{render_cards, render_modal, GridView, ModalView};
use crate::services::search::{filter, SearchMode};
use crate::services::session::DirectoryLifecycle;

/// User interaction delivered by the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DirectoryEvent {
    CardClicked { email: String },
    ModalClose,
    ModalPrev,
    ModalNext,
    /// Keystroke or paste in the search field
    SearchInput { query: String },
    /// Search button or enter
    SearchSubmit { query: String },
}

/// The single region replacement an event produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "view", rename_all = "snake_case")]
pub enum ViewUpdate {
    OpenModal(ModalView),
    CloseModal,
    ReplaceCards(GridView),
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct EventRouter {
    navigator: ModalNavigator,
    search_mode: SearchMode,
    query: String,
}

impl EventRouter {
    pub fn new(search_mode: SearchMode) -> Self {
        Self {
            search_mode,
            ..Self::default()
        }
    }

    pub fn navigator(&self) -> &ModalNavigator {
        &self.navigator
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Last query that was applied successfully
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Dispatch one event
    ///
    /// Events are inert until the directory is ready. A click on an unknown
    /// email and prev/next at an edge or with the modal closed leave the view
    /// `Unchanged`. An invalid search pattern returns
    /// [`Error::InvalidQuery`] and keeps the current cards.
    pub fn handle(
        &mut self,
        lifecycle: &DirectoryLifecycle,
        event: DirectoryEvent,
    ) -> Result<ViewUpdate> {
        let DirectoryLifecycle::Ready(store) = lifecycle else {
            return Ok(ViewUpdate::Unchanged);
        };

        match event {
            DirectoryEvent::CardClicked { email } => {
                let selected = self.navigator.select(store, &email).map(|_| ());
                self.settle(store, selected)
            }
            DirectoryEvent::ModalClose => {
                self.navigator.close();
                Ok(ViewUpdate::CloseModal)
            }
            DirectoryEvent::ModalPrev => {
                // Boundary presses are swallowed like a hidden button
                let moved = self.navigator.prev(store).map(|_| ());
                self.settle(store, moved)
            }
            DirectoryEvent::ModalNext => {
                let moved = self.navigator.next(store).map(|_| ());
                self.settle(store, moved)
            }
            DirectoryEvent::SearchInput { query } | DirectoryEvent::SearchSubmit { query } => {
                let grid = self.filtered_grid(store, &query)?;
                self.query = query;
                Ok(ViewUpdate::ReplaceCards(grid))
            }
        }
    }

    /// Cards for the currently applied query
    pub fn current_grid(&self, store: &DirectoryStore) -> Result<GridView> {
        self.filtered_grid(store, &self.query)
    }

    /// Modal view for the open record, if any
    pub fn current_modal(&self, store: &DirectoryStore) -> Option<ModalView> {
        self.navigator.current(store).map(|record| {
            render_modal(
                record,
                self.navigator.can_go_prev(store),
                self.navigator.can_go_next(store),
            )
        })
    }

    fn filtered_grid(&self, store: &DirectoryStore, query: &str) -> Result<GridView> {
        let matches = filter(query, store.all(), self.search_mode)?;
        Ok(render_cards(matches))
    }

    /// Map a navigator outcome to the modal update
    fn settle(&self, store: &DirectoryStore, outcome: Result<()>) -> Result<ViewUpdate> {
        match outcome {
            Ok(()) => Ok(self.modal_update(store)),
            Err(Error::NavigationOutOfRange(_) | Error::NotFound(_)) => Ok(ViewUpdate::Unchanged),
            Err(e) => Err(e),
        }
    }

    fn modal_update(&self, store: &DirectoryStore) -> ViewUpdate {
        match self.current_modal(store) {
            Some(view) => ViewUpdate::OpenModal(view),
            None => ViewUpdate::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo::generate_demo_users;
    use crate::services::normalize::normalize_users;

    fn ready(count: usize) -> DirectoryLifecycle {
        let mut store = DirectoryStore::new();
        store
            .initialize(normalize_users(&generate_demo_users(count, 21)).unwrap())
            .unwrap();
        DirectoryLifecycle::Ready(store)
    }

    fn store(lifecycle: &DirectoryLifecycle) -> &DirectoryStore {
        match lifecycle {
            DirectoryLifecycle::Ready(store) => store,
            _ => panic!("not ready"),
        }
    }

    fn click(lifecycle: &DirectoryLifecycle, index: usize) -> DirectoryEvent {
        DirectoryEvent::CardClicked {
            email: store(lifecycle).at(index).unwrap().email.clone(),
        }
    }

    #[test]
    fn test_inert_before_ready() {
        let mut router = EventRouter::default();
        for lifecycle in [
            DirectoryLifecycle::Loading,
            DirectoryLifecycle::Failed("boom".to_string()),
        ] {
            let update = router
                .handle(&lifecycle, DirectoryEvent::SearchInput { query: "a".into() })
                .unwrap();
            assert_eq!(update, ViewUpdate::Unchanged);
            let update = router.handle(&lifecycle, DirectoryEvent::ModalNext).unwrap();
            assert_eq!(update, ViewUpdate::Unchanged);
        }
    }

    #[test]
    fn test_card_click_opens_modal() {
        let lifecycle = ready(12);
        let mut router = EventRouter::default();

        let update = router.handle(&lifecycle, click(&lifecycle, 0)).unwrap();

        let ViewUpdate::OpenModal(view) = update else {
            panic!("expected modal");
        };
        assert_eq!(view.email, store(&lifecycle).at(0).unwrap().email);
        assert!(!view.show_prev);
        assert!(view.show_next);
    }

    #[test]
    fn test_unknown_email_click_is_unchanged() {
        let lifecycle = ready(12);
        let mut router = EventRouter::default();
        router.handle(&lifecycle, click(&lifecycle, 2)).unwrap();

        let update = router
            .handle(
                &lifecycle,
                DirectoryEvent::CardClicked {
                    email: "nobody@example.com".to_string(),
                },
            )
            .unwrap();

        assert_eq!(update, ViewUpdate::Unchanged);
        assert_eq!(router.navigator().position(store(&lifecycle)), Some(2));
    }

    #[test]
    fn test_repeated_click_is_idempotent() {
        let lifecycle = ready(12);
        let mut router = EventRouter::default();
        let first = router.handle(&lifecycle, click(&lifecycle, 3)).unwrap();
        let second = router.handle(&lifecycle, click(&lifecycle, 3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_navigation_and_boundaries() {
        let lifecycle = ready(12);
        let mut router = EventRouter::default();
        router.handle(&lifecycle, click(&lifecycle, 10)).unwrap();

        let update = router.handle(&lifecycle, DirectoryEvent::ModalNext).unwrap();
        let ViewUpdate::OpenModal(view) = update else {
            panic!("expected modal");
        };
        assert_eq!(view.email, store(&lifecycle).at(11).unwrap().email);
        assert!(!view.show_next);

        let update = router.handle(&lifecycle, DirectoryEvent::ModalNext).unwrap();
        assert_eq!(update, ViewUpdate::Unchanged);
        assert_eq!(router.navigator().position(store(&lifecycle)), Some(11));
    }

    #[test]
    fn test_navigation_with_closed_modal_is_noop() {
        let lifecycle = ready(4);
        let mut router = EventRouter::default();
        let update = router.handle(&lifecycle, DirectoryEvent::ModalPrev).unwrap();
        assert_eq!(update, ViewUpdate::Unchanged);
    }

    #[test]
    fn test_close_is_idempotent() {
        let lifecycle = ready(4);
        let mut router = EventRouter::default();
        router.handle(&lifecycle, click(&lifecycle, 1)).unwrap();
        assert_eq!(
            router.handle(&lifecycle, DirectoryEvent::ModalClose).unwrap(),
            ViewUpdate::CloseModal
        );
        assert_eq!(
            router.handle(&lifecycle, DirectoryEvent::ModalClose).unwrap(),
            ViewUpdate::CloseModal
        );
        assert!(!router.navigator().is_open());
    }

    #[test]
    fn test_search_replaces_cards() {
        let lifecycle = ready(12);
        let mut router = EventRouter::default();
        let name = store(&lifecycle).at(4).unwrap().full_name.clone();

        let update = router
            .handle(&lifecycle, DirectoryEvent::SearchSubmit { query: name.to_uppercase() })
            .unwrap();

        let ViewUpdate::ReplaceCards(grid) = update else {
            panic!("expected cards");
        };
        assert!(grid.cards().iter().any(|c| c.full_name == name));
        assert!(grid
            .cards()
            .iter()
            .all(|c| c.full_name.to_lowercase().contains(&name.to_lowercase())));
    }

    #[test]
    fn test_input_and_submit_agree() {
        let lifecycle = ready(12);
        let mut router = EventRouter::default();
        let a = router
            .handle(&lifecycle, DirectoryEvent::SearchInput { query: "e".into() })
            .unwrap();
        let b = router
            .handle(&lifecycle, DirectoryEvent::SearchSubmit { query: "e".into() })
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_pattern_keeps_query() {
        let lifecycle = ready(12);
        let mut router = EventRouter::new(SearchMode::Pattern);
        router
            .handle(&lifecycle, DirectoryEvent::SearchInput { query: "an".into() })
            .unwrap();

        let err = router
            .handle(&lifecycle, DirectoryEvent::SearchInput { query: "an(".into() })
            .unwrap_err();

        assert!(matches!(err, Error::InvalidQuery(_)));
        assert_eq!(router.query(), "an");
    }

    #[test]
    fn test_literal_mode_accepts_metacharacters() {
        let lifecycle = ready(12);
        let mut router = EventRouter::new(SearchMode::Literal);
        let update = router
            .handle(&lifecycle, DirectoryEvent::SearchInput { query: "an(".into() })
            .unwrap();
        assert_eq!(update, ViewUpdate::ReplaceCards(GridView::Cards(Vec::new())));
    }

    #[test]
    fn test_navigation_ignores_filter() {
        let lifecycle = ready(12);
        let mut router = EventRouter::default();
        router
            .handle(&lifecycle, DirectoryEvent::SearchInput { query: "zzz".into() })
            .unwrap();
        router.handle(&lifecycle, click(&lifecycle, 0)).unwrap();
        let update = router.handle(&lifecycle, DirectoryEvent::ModalNext).unwrap();
        assert!(matches!(update, ViewUpdate::OpenModal(_)));
    }
}
