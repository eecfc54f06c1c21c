//! In-memory stores for artists, submissions, accounts, sessions and wizards

mod account_store;
mod artist_store;
pub mod seed;
mod session_store;
mod submission_store;
mod wizard_store;

pub use account_store::AccountStore;
pub use artist_store::ArtistStore;
pub use session_store::SessionStore;
pub use submission_store::SubmissionStore;
pub use wizard_store::{Wizard, WizardStore};
