//! Data models for Artistly
//!
//! This module contains the records served by the API. All of them are
//! in-memory only.

mod account;
mod artist;
mod enums;
mod price;
mod submission;

pub use account::{Account, Session};
pub use artist::Artist;
pub use enums::{Category, FeeBand, Language, SubmissionStatus, UserType};
pub use price::{PriceParseError, PriceRange};
pub use submission::Submission;
