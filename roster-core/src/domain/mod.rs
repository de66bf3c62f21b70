//! Core domain entities
//!
//! Pure data structures with no I/O. Raw API payloads live next to the
//! normalized records they are turned into.

mod raw_user;
pub mod result;
mod user;

pub use raw_user::{
    RandomUserResponse, RawDob, RawLocation, RawName, RawPicture, RawStreet, RawUser,
};
pub use result::Direction;
pub use user::{StreetAddress, UserRecord};
