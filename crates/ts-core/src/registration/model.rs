use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::AccountId;
use crate::security::SecretString;

/// Account type chosen in the second wizard step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Tutor,
    Guardian,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tutor => "TUTOR",
            Role::Guardian => "GUARDIAN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TUTOR" => Ok(Role::Tutor),
            "GUARDIAN" => Ok(Role::Guardian),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Raw values of the first wizard step, exactly as typed.
///
/// Kept verbatim so that stepping back from the role screen shows the user
/// what they entered.
#[derive(Clone, Default, PartialEq, Eq, Validate)]
pub struct RegistrationForm {
    #[validate(custom(function = "super::validation::not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "super::validation::not_blank"))]
    pub last_name: String,
    #[validate(custom(function = "super::validation::required_email"))]
    pub email: String,
    #[validate(custom(function = "super::validation::not_blank"))]
    pub phone: String,
    #[validate(custom(function = "super::validation::not_blank"))]
    pub password: String,
    #[validate(
        custom(function = "super::validation::not_blank"),
        must_match(other = "password")
    )]
    pub confirm_password: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Validated first-step data, held until the account is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
}

/// Account-creation request sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub password: SecretString,
}

impl NewAccount {
    pub fn from_draft(draft: &RegistrationDraft, role: Role) -> Self {
        Self {
            name: draft.full_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            role,
            password: draft.password.clone(),
        }
    }
}

/// Account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: Role,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_tutor_and_uses_upper_case_wire_names() {
        assert_eq!(Role::default(), Role::Tutor);
        assert_eq!(serde_json::to_string(&Role::Guardian).unwrap(), "\"GUARDIAN\"");
        assert_eq!("guardian".parse::<Role>().unwrap(), Role::Guardian);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn form_debug_hides_passwords() {
        let form = RegistrationForm {
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
            ..Default::default()
        };
        assert!(!format!("{form:?}").contains("hunter22"));
    }

    #[test]
    fn account_deserializes_from_camel_case() {
        let json = r#"{"id":"u1","name":"Ana Silva","email":"ana@x.com","role":"TUTOR","profileImage":null}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id.as_str(), "u1");
        assert_eq!(account.role, Role::Tutor);
        assert_eq!(account.phone, "");
    }
}
