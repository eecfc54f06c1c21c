//! Onboarding form state and validation
//!
//! The form holds whatever the client typed, section by section. Validation
//! turns it into a typed [`OnboardingApplication`] or a list of field errors.

use serde::{Deserialize, Serialize};

use crate::models::{Category, FeeBand, Language};

/// "Basic Info" section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicSection {
    pub full_name: String,
    pub bio: String,
    pub categories: Vec<String>,
}

/// "Skills & Pricing" section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeSkillSection {
    pub fee: Option<String>,
    pub languages: Vec<String>,
}

/// "Location" section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationSection {
    pub location: String,
}

/// The whole onboarding record, built up across wizard steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingForm {
    pub basic: BasicSection,
    pub fee_skill: FeeSkillSection,
    pub location: LocationSection,
}

/// A validation failure on one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path such as `basic.fullName`
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A fully validated application
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingApplication {
    pub full_name: String,
    pub bio: String,
    pub categories: Vec<Category>,
    pub fee: FeeBand,
    pub languages: Vec<Language>,
    pub location: String,
}

impl OnboardingApplication {
    /// First category picked. Validation guarantees at least one.
    pub fn primary_category(&self) -> Category {
        self.categories.first().copied().unwrap_or(Category::Singer)
    }
}

fn parse_choices<T: PartialEq>(
    raw: &[String],
    field: &str,
    empty_message: &str,
    kind: &str,
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, Vec<FieldError>> {
    if raw.is_empty() {
        return Err(vec![FieldError::new(field, empty_message)]);
    }

    let mut parsed = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();
    for value in raw {
        match lookup(value) {
            Some(v) if !parsed.contains(&v) => parsed.push(v),
            Some(_) => {}
            None => errors.push(FieldError::new(field, format!("Unknown {}: {}", kind, value))),
        }
    }

    if errors.is_empty() {
        Ok(parsed)
    } else {
        Err(errors)
    }
}

impl BasicSection {
    fn check(&self) -> Result<(String, Vec<Category>), Vec<FieldError>> {
        let mut errors = Vec::new();

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.push(FieldError::new("basic.fullName", "Full name is required"));
        }

        let categories = parse_choices(
            &self.categories,
            "basic.categories",
            "Please pick at least one category",
            "category",
            Category::from_str,
        )
        .unwrap_or_else(|mut e| {
            errors.append(&mut e);
            Vec::new()
        });

        if errors.is_empty() {
            Ok((full_name.to_string(), categories))
        } else {
            Err(errors)
        }
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.check().err().unwrap_or_default()
    }
}

impl FeeSkillSection {
    fn check(&self) -> Result<(FeeBand, Vec<Language>), Vec<FieldError>> {
        let mut errors = Vec::new();

        let fee = match self.fee.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(FieldError::new("feeSkill.fee", "Please select a fee range"));
                None
            }
            Some(label) => {
                let band = FeeBand::from_label(label);
                if band.is_none() {
                    errors.push(FieldError::new(
                        "feeSkill.fee",
                        format!("Unknown fee range: {}", label),
                    ));
                }
                band
            }
        };

        let languages = parse_choices(
            &self.languages,
            "feeSkill.languages",
            "Please select at least one language",
            "language",
            Language::from_str,
        )
        .unwrap_or_else(|mut e| {
            errors.append(&mut e);
            Vec::new()
        });

        match fee {
            Some(fee) if errors.is_empty() => Ok((fee, languages)),
            _ => Err(errors),
        }
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.check().err().unwrap_or_default()
    }
}

impl LocationSection {
    fn check(&self) -> Result<String, Vec<FieldError>> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(vec![FieldError::new(
                "location.location",
                "Location is required",
            )]);
        }
        Ok(location.to_string())
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.check().err().unwrap_or_default()
    }
}

impl OnboardingForm {
    /// Validate every section, reporting all failing fields at once
    pub fn validate(&self) -> Result<OnboardingApplication, Vec<FieldError>> {
        match (
            self.basic.check(),
            self.fee_skill.check(),
            self.location.check(),
        ) {
            (Ok((full_name, categories)), Ok((fee, languages)), Ok(location)) => {
                Ok(OnboardingApplication {
                    full_name,
                    bio: self.basic.bio.clone(),
                    categories,
                    fee,
                    languages,
                    location,
                })
            }
            (basic, fee_skill, location) => {
                let mut errors = Vec::new();
                errors.extend(basic.err().unwrap_or_default());
                errors.extend(fee_skill.err().unwrap_or_default());
                errors.extend(location.err().unwrap_or_default());
                Err(errors)
            }
        }
    }
}
