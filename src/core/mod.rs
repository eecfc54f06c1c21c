//! Core logic for Artistly: filtering, the onboarding wizard, and form validation

pub mod accounts;
pub mod filter;
pub mod onboarding;
pub mod submission;
pub mod wizard;

pub use filter::{ArtistFilter, ListingQuery, PriceBucket, SubmissionSearch};
pub use onboarding::{FieldError, OnboardingForm};
pub use submission::{EchoResponse, SubmissionDesk};
pub use wizard::{OnboardingStep, StepOutcome, StepSequencer};
