//! Artist submission model for the manager dashboard

use chrono::NaiveDate;
use serde::Serialize;

use super::{Category, PriceRange, SubmissionStatus};

/// An artist application awaiting (or past) manager review
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub city: String,
    pub fee: PriceRange,
    pub status: SubmissionStatus,
    pub submitted_date: NaiveDate,
    pub languages: Vec<String>,
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }
}
