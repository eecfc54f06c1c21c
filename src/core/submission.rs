//! Onboarding submission handling
//!
//! The submit endpoint is an echo stub: it parses the body and returns it
//! unchanged. Wizard submissions go through the same envelope and are also
//! filed on the dashboard.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::onboarding::{OnboardingApplication, OnboardingForm};
use crate::models::Submission;
use crate::stores::SubmissionStore;

/// `{success, data}` on success, `{success, error}` on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EchoResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Parse a raw body and echo it back. Any JSON value is accepted.
pub fn echo(body: &[u8]) -> Result<EchoResponse, serde_json::Error> {
    let data: Value = serde_json::from_slice(body)?;
    Ok(EchoResponse::ok(data))
}

/// Receipt for a wizard submission
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    #[serde(flatten)]
    pub echo: EchoResponse,
    pub submission: Submission,
}

/// Accepts validated applications from the wizard
pub struct SubmissionDesk<'a> {
    submissions: &'a SubmissionStore,
}

impl<'a> SubmissionDesk<'a> {
    pub fn new(submissions: &'a SubmissionStore) -> Self {
        Self { submissions }
    }

    /// Echo the submitted form and file it as a pending submission
    pub fn submit(
        &self,
        form: &OnboardingForm,
        application: &OnboardingApplication,
    ) -> Result<Receipt, serde_json::Error> {
        let body = serde_json::to_vec(form)?;
        let echo = echo(&body)?;
        let submission = self.submissions.file(application);

        tracing::info!(
            "Filed onboarding submission {} for {}",
            submission.id,
            submission.name
        );

        Ok(Receipt { echo, submission })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::onboarding::tests::valid_form;

    #[test]
    fn test_echo_any_json() {
        let response = echo(br#"{"a":[1,2,{"b":null}]}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap()["a"][2]["b"], Value::Null);

        let scalar = echo(b"42").unwrap();
        assert_eq!(scalar.data, Some(Value::from(42)));
    }

    #[test]
    fn test_echo_malformed() {
        assert!(echo(b"{not json").is_err());
        assert!(echo(b"").is_err());
    }

    #[test]
    fn test_failed_shape() {
        let json = serde_json::to_value(EchoResponse::failed("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn test_desk_echoes_form() {
        let store = SubmissionStore::new(Vec::new());
        let form = valid_form();
        let application = form.validate().unwrap();

        let receipt = SubmissionDesk::new(&store).submit(&form, &application).unwrap();
        assert!(receipt.echo.success);
        assert_eq!(
            receipt.echo.data,
            Some(serde_json::to_value(&form).unwrap())
        );
        assert_eq!(receipt.submission.id, 1);
        assert_eq!(store.all().len(), 1);
    }
}
