//! Submission store - applications shown on the manager dashboard

use chrono::Local;
use parking_lot::RwLock;

use crate::core::onboarding::OnboardingApplication;
use crate::models::{Submission, SubmissionStatus};

/// In-memory store for submissions, newest filings appended last
pub struct SubmissionStore {
    submissions: RwLock<Vec<Submission>>,
}

impl SubmissionStore {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            submissions: RwLock::new(submissions),
        }
    }

    pub fn all(&self) -> Vec<Submission> {
        self.submissions.read().clone()
    }

    pub fn get(&self, id: u32) -> Option<Submission> {
        self.submissions.read().iter().find(|s| s.id == id).cloned()
    }

    pub fn pending_count(&self) -> usize {
        self.submissions.read().iter().filter(|s| s.is_pending()).count()
    }

    /// Set the review status. Returns the updated row, or None for an unknown id.
    pub fn set_status(&self, id: u32, status: SubmissionStatus) -> Option<Submission> {
        let mut submissions = self.submissions.write();
        let submission = submissions.iter_mut().find(|s| s.id == id)?;
        submission.status = status;
        Some(submission.clone())
    }

    /// File a validated onboarding application as a pending submission
    pub fn file(&self, application: &OnboardingApplication) -> Submission {
        let mut submissions = self.submissions.write();
        let id = submissions.iter().map(|s| s.id).max().unwrap_or(0) + 1;

        let submission = Submission {
            id,
            name: application.full_name.clone(),
            category: application.primary_category(),
            city: application.location.clone(),
            fee: application.fee.range(),
            status: SubmissionStatus::Pending,
            submitted_date: Local::now().date_naive(),
            languages: application
                .languages
                .iter()
                .map(|l| l.as_str().to_string())
                .collect(),
        };

        submissions.push(submission.clone());
        submission
    }
}
