//! Sign-in and sign-up form validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::onboarding::FieldError;
use crate::models::UserType;

const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid digits regex"));

fn field_error(field: &str, message: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if !EMAIL_RE.is_match(email.trim()) {
        errors.push(field_error("email", "Invalid email"));
    }
}

fn check_password(field: &str, password: &str, errors: &mut Vec<FieldError>) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(field_error(
            field,
            "String must contain at least 8 character(s)",
        ));
    }
}

/// Sign-in form body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        check_password("password", &self.password, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Sign-up form body as posted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: String,
    pub agree_to_terms: bool,
}

/// A sign-up that passed validation
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub user_type: UserType,
    pub agree_to_terms: bool,
}

impl SignupForm {
    pub fn validate(self) -> Result<SignupRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        check_email(&self.email, &mut errors);

        if !DIGITS_RE.is_match(&self.phone) {
            errors.push(field_error("phone", "Only digits allowed"));
        }

        check_password("password", &self.password, &mut errors);
        check_password("confirmPassword", &self.confirm_password, &mut errors);

        let user_type = UserType::from_str(&self.user_type);
        if user_type.is_none() {
            errors.push(field_error(
                "userType",
                "Expected 'event-planner' | 'artist-manager'",
            ));
        }

        // the mismatch check only runs once the field-level checks pass
        if errors.is_empty() && self.password != self.confirm_password {
            errors.push(field_error("confirmPassword", "Passwords do not match"));
        }

        match user_type {
            Some(user_type) if errors.is_empty() => Ok(SignupRequest {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email.trim().to_string(),
                phone: self.phone,
                password: self.password,
                user_type,
                agree_to_terms: self.agree_to_terms,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn signup_form() -> SignupForm {
        SignupForm {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "5551234".to_string(),
            password: "cobol-1959".to_string(),
            confirm_password: "cobol-1959".to_string(),
            user_type: "artist-manager".to_string(),
            agree_to_terms: true,
        }
    }

    pub(crate) fn signup() -> SignupRequest {
        signup_form().validate().unwrap()
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_signup() {
        let request = signup();
        assert_eq!(request.user_type, UserType::ArtistManager);
        assert_eq!(request.email, "grace@example.com");
    }

    #[test]
    fn test_password_mismatch() {
        let mut form = signup_form();
        form.confirm_password = "different-1".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["confirmPassword"]);
        assert_eq!(errors[0].message, "Passwords do not match");
    }

    #[test]
    fn test_field_errors() {
        let form = SignupForm {
            email: "not-an-email".to_string(),
            phone: "555-1234".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            user_type: "admin".to_string(),
            ..signup_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["email", "phone", "password", "confirmPassword", "userType"]
        );
    }

    #[test]
    fn test_terms_not_required() {
        let form = SignupForm {
            agree_to_terms: false,
            ..signup_form()
        };
        assert!(!form.validate().unwrap().agree_to_terms);
    }

    #[test]
    fn test_login_validation() {
        let ok = LoginForm {
            email: "a@b.co".to_string(),
            password: "12345678".to_string(),
        };
        assert!(ok.validate().is_ok());

        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["email", "password"]);
    }
}
