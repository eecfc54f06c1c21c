//! Shared application state handed to every route as `web::Data<AppState>`

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::stores::{seed, AccountStore, ArtistStore, SessionStore, SubmissionStore, WizardStore};

pub struct AppState {
    pub config: AppConfig,
    pub artists: ArtistStore,
    pub submissions: SubmissionStore,
    pub accounts: AccountStore,
    pub sessions: SessionStore,
    pub wizards: WizardStore,
}

impl AppState {
    /// Build the state with the mock catalogue loaded
    pub fn new(config: AppConfig) -> Result<Self> {
        let artists = seed::artists().context("Failed to load artist catalogue")?;
        let submissions = seed::submissions().context("Failed to load submissions")?;

        Ok(Self {
            config,
            artists: ArtistStore::new(artists),
            submissions: SubmissionStore::new(submissions),
            accounts: AccountStore::new(),
            sessions: SessionStore::new(),
            wizards: WizardStore::new(),
        })
    }
}
