//! First-step validation for the registration wizard.
//!
//! Rules live as `validator` attributes on [`RegistrationForm`]; this module
//! holds the custom checks and turns the validator report into per-field
//! messages the form can show next to each input.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::{Validate, ValidationError};

use super::model::{RegistrationDraft, RegistrationForm};
use crate::security::SecretString;

const CODE_REQUIRED: &str = "required";
const CODE_EMAIL: &str = "email";
const CODE_MUST_MATCH: &str = "must_match";

lazy_static! {
    /// Local part per RFC 5322 "atext", domain made of DNS labels with at
    /// least one dot and an alphabetic TLD.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$"
    )
    .expect("email regex is valid");
}

/// Inputs of the first wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "password" => Some(Self::Password),
            "confirm_password" => Some(Self::ConfirmPassword),
            _ => None,
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl FieldError {
    fn from_code(code: &str) -> Self {
        match code {
            CODE_EMAIL => FieldError::InvalidEmail,
            CODE_MUST_MATCH => FieldError::PasswordMismatch,
            _ => FieldError::Required,
        }
    }
}

/// Per-field validation errors, ordered by form position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<RegistrationField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: RegistrationField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: RegistrationField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Caption to render under the input; empty when the field is valid.
    pub fn message(&self, field: RegistrationField) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegistrationField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{field:?}: {error}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(report: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();
        for (key, failures) in report.field_errors() {
            let Some(field) = RegistrationField::from_key(&key) else {
                continue;
            };
            // "required" wins over format errors on the same field
            let error = if failures.iter().any(|e| e.code == CODE_REQUIRED) {
                FieldError::Required
            } else {
                match failures.first() {
                    Some(failure) => FieldError::from_code(&failure.code),
                    None => continue,
                }
            };
            errors.insert(field, error);
        }
        errors
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(CODE_REQUIRED));
    }
    Ok(())
}

pub(crate) fn required_email(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !is_valid_email(value) {
        let mut error = ValidationError::new(CODE_EMAIL);
        error.message = Some(Cow::Borrowed("invalid email address"));
        return Err(error);
    }
    Ok(())
}

/// Checks an address against the email grammar accepted by the sign-up form.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// Validates the first wizard step and builds the normalized draft.
///
/// Either every field passes and a draft is returned, or nothing is
/// returned and every failing field carries one error.
pub fn validate_form(form: &RegistrationForm) -> Result<RegistrationDraft, FieldErrors> {
    form.validate().map_err(FieldErrors::from)?;

    Ok(RegistrationDraft {
        full_name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        password: SecretString::new(form.password.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            email: "ana@x.com".into(),
            phone: "11999999999".into(),
            password: "abc12345".into(),
            confirm_password: "abc12345".into(),
        }
    }

    #[test]
    fn valid_form_builds_draft_with_full_name() {
        let draft = validate_form(&valid_form()).unwrap();

        assert_eq!(draft.full_name, "Ana Silva");
        assert_eq!(draft.email, "ana@x.com");
        assert_eq!(draft.phone, "11999999999");
        assert_eq!(draft.password.expose(), "abc12345");
    }

    #[test]
    fn each_missing_field_is_reported_as_required() {
        let setters: [(RegistrationField, fn(&mut RegistrationForm)); 6] = [
            (RegistrationField::FirstName, |f| f.first_name.clear()),
            (RegistrationField::LastName, |f| f.last_name = "   ".into()),
            (RegistrationField::Email, |f| f.email.clear()),
            (RegistrationField::Phone, |f| f.phone = "\t".into()),
            (RegistrationField::Password, |f| f.password.clear()),
            (RegistrationField::ConfirmPassword, |f| {
                f.confirm_password.clear()
            }),
        ];

        for (field, clear) in setters {
            let mut form = valid_form();
            clear(&mut form);
            let errors = validate_form(&form).unwrap_err();
            assert_eq!(errors.get(field), Some(FieldError::Required), "{field:?}");
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_form(&RegistrationForm::default()).unwrap_err();

        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|(_, e)| e == FieldError::Required));
    }

    #[test]
    fn password_confirmation_must_match_exactly() {
        let mut form = valid_form();
        form.confirm_password = "abc12345 ".into();

        let errors = validate_form(&form).unwrap_err();

        assert_eq!(
            errors.get(RegistrationField::ConfirmPassword),
            Some(FieldError::PasswordMismatch)
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(RegistrationField::ConfirmPassword),
            "passwords do not match"
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["abc", "a@b", "@b.com", "a@.com", "a b@c.com", "a@b.c"] {
            let mut form = valid_form();
            form.email = email.into();
            let errors = validate_form(&form).unwrap_err();
            assert_eq!(
                errors.get(RegistrationField::Email),
                Some(FieldError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn well_formed_emails_are_accepted() {
        for email in ["a@b.com", "first.last+tag@school.com.br", " ana@x.com "] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn names_are_trimmed_in_draft() {
        let mut form = valid_form();
        form.first_name = "  Ana ".into();
        form.last_name = " Silva".into();

        let draft = validate_form(&form).unwrap();

        assert_eq!(draft.full_name, "Ana Silva");
    }
}
