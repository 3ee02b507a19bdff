//! Form validation for contact submissions.
//!
//! Every rule runs on every submission and all failures are collected, so
//! a form can show each problem at once.

use crate::domain::{EmailAddress, PhoneNumber, PhoneRegion, ValidationError};
use crate::error::StoreResult;
use crate::models::ContactFields;
use crate::repositories::ContactRepository;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A single failed check on a submitted contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Contact name is required!")]
    EmptyName,

    #[error("Contact name \"{0}\" is already taken!")]
    DuplicateName(String),

    #[error("Invalid email address!")]
    InvalidEmail(String),

    #[error("Invalid mobile number!")]
    InvalidPhone(String),
}

impl FieldError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::DuplicateName(_) => "name",
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhone(_) => "phone",
        }
    }
}

/// All failed checks for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether any collected error matches `pred`.
    pub fn any(&self, pred: impl Fn(&FieldError) -> bool) -> bool {
        self.0.iter().any(pred)
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Which uniqueness rule applies to the submitted name.
#[derive(Debug, Clone, Copy)]
pub enum NameRule<'a> {
    /// A new contact: the name must not exist yet.
    Create,
    /// An edit: the name may equal the record's previous name.
    Update { old_name: &'a str },
}

/// Validates contact submissions against the store and format rules.
#[derive(Clone)]
pub struct ContactValidator {
    repository: Arc<dyn ContactRepository>,
    region: PhoneRegion,
}

impl ContactValidator {
    pub fn new(repository: Arc<dyn ContactRepository>, region: PhoneRegion) -> Self {
        Self { repository, region }
    }

    /// Run every rule against `fields`.
    ///
    /// Returns the collected failures (empty when the submission is valid).
    /// Only a store failure during the duplicate lookup is an `Err`.
    pub async fn validate(
        &self,
        fields: &ContactFields,
        rule: NameRule<'_>,
    ) -> StoreResult<ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if fields.name.trim().is_empty() {
            errors.push(FieldError::EmptyName);
        }

        let existing = self.repository.find_by_name(&fields.name).await?;
        let taken = match rule {
            NameRule::Create => existing.is_some(),
            NameRule::Update { old_name } => existing.is_some() && fields.name != old_name,
        };
        if taken {
            errors.push(FieldError::DuplicateName(fields.name.clone()));
        }

        if let Err(ValidationError::InvalidEmail(email)) = EmailAddress::new(fields.email.as_str()) {
            errors.push(FieldError::InvalidEmail(email));
        }

        if let Err(ValidationError::InvalidPhone(phone)) =
            PhoneNumber::new(fields.phone.as_str(), self.region)
        {
            errors.push(FieldError::InvalidPhone(phone));
        }

        if !errors.is_empty() {
            tracing::debug!(
                name = %fields.name,
                failures = errors.len(),
                "Contact submission failed validation"
            );
        }

        Ok(errors)
    }
}
