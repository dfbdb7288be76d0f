use serde::{Deserialize, Serialize};

use crate::ids::AccountId;
use crate::registration::Role;

/// The signed-in user as seen by screens that depend on the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: AccountId,
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_tutor(&self) -> bool {
        self.role == Role::Tutor
    }
}
