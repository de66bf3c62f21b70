//! Service layer - directory logic
//!
//! Leaf-first: normalize raw users, hold them in the directory store, filter
//! and navigate them, render view descriptions, and route UI events. The
//! session ties these to the one fetch.

mod demo;
pub mod directory;
pub mod logging;
pub mod navigator;
pub mod normalize;
pub mod render;
pub mod router;
pub mod search;
pub mod session;

pub use demo::DemoService;
pub use directory::DirectoryStore;
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use navigator::{ModalNavigator, ModalState};
pub use normalize::{normalize_user, normalize_users};
pub use render::{CardView, GridView, ModalView};
pub use router::{DirectoryEvent, EventRouter, ViewUpdate};
pub use search::{filter, SearchMode};
pub use session::{DirectoryLifecycle, DirectorySession};
