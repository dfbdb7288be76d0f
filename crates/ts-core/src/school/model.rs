use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, SchoolId, StudentId};

/// School as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: SchoolId,
    pub user_id: AccountId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "cep")]
    pub postal_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_number: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl School {
    /// Single-line address, e.g. `Rua A, 10 - Centro, Recife - PE`.
    pub fn formatted_address(&self) -> String {
        format!(
            "{}, {} - {}, {} - {}",
            self.address, self.address_number, self.district, self.city, self.state
        )
    }
}

/// School creation request. The profile image is attached after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchool {
    pub user_id: Option<AccountId>,
    pub name: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    pub address: String,
    pub address_number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    #[serde(default)]
    pub school_id: Option<SchoolId>,
    #[serde(default)]
    pub profile_image: Option<String>,
}
