//! Card renderer - view descriptions for the grid and the detail modal
//!
//! Pure projections; the front end decides how to draw them.

use serde::Serialize;

use crate::domain::UserRecord;

/// Suffix appended to the failure banner in the grid region
pub const FAILED_FETCH_SUFFIX: &str = ":( No data from the API...";

/// One card in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub email: String,
    pub full_name: String,
    pub picture_url: String,
    /// "City, State"
    pub location: String,
}

/// Contents of the grid region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum GridView {
    /// Fetch still in flight
    Loading,
    /// Cards to show (possibly none after filtering)
    Cards(Vec<CardView>),
    /// Error banner shown instead of cards
    Failed(String),
}

impl GridView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            GridView::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// Contents of the detail modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    pub picture_url: String,
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
    pub show_prev: bool,
    pub show_next: bool,
}

pub fn render_card(record: &UserRecord) -> CardView {
    CardView {
        email: record.email.clone(),
        full_name: record.full_name.clone(),
        picture_url: record.picture_url.clone(),
        location: record.location_line(),
    }
}

pub fn render_cards<'a>(records: impl IntoIterator<Item = &'a UserRecord>) -> GridView {
    GridView::Cards(records.into_iter().map(render_card).collect())
}

/// Banner text for a failed fetch
pub fn render_failure(message: &str) -> GridView {
    GridView::Failed(format!("{} {}", message, FAILED_FETCH_SUFFIX))
}

pub fn render_modal(record: &UserRecord, show_prev: bool, show_next: bool) -> ModalView {
    ModalView {
        picture_url: record.picture_url.clone(),
        full_name: record.full_name.clone(),
        email: record.email.clone(),
        city: record.city.clone(),
        phone: record.phone_formatted.clone(),
        address: record.address_line(),
        birthday: record.dob_formatted.clone(),
        show_prev,
        show_next,
    }
}
