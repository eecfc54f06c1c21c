//! Account and session models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::UserType;

/// A signed-up user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// `salt$hash`, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub user_type: UserType,
}

impl Account {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// An authenticated session. Created at sign-in or sign-up, ended at sign-out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub account_id: u32,
    pub email: String,
    pub display_name: String,
    pub user_type: UserType,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn for_account(account: &Account, ttl_secs: i64) -> Self {
        let issued_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id: account.id,
            email: account.email.clone(),
            display_name: account.display_name(),
            user_type: account.user_type,
            issued_at,
            expires_at: issued_at + chrono::Duration::seconds(ttl_secs),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn is_manager(&self) -> bool {
        self.user_type == UserType::ArtistManager
    }
}
