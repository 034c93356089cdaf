use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Role label carried by a user. Stored only; no authorization is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "moderator" => Ok(Role::Moderator),
            other => Err(Error::InvalidRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    /// Cleartext by design; this crate is a teaching scaffold, not a vault.
    pub password: String,
    pub name: String,
    pub is_active: bool,
    pub role: Role,
}

impl User {
    /// Builds a user record. Input validation happens in the service, not
    /// here; construction never fails. New users start inactive.
    pub fn new(email: String, password: String, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| {
            email
                .split('@')
                .next()
                .unwrap_or(email.as_str())
                .to_string()
        });
        Self {
            email,
            password,
            name,
            is_active: false,
            role: Role::User,
        }
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Assigns a role from its string label. Fails with
    /// [`Error::InvalidRole`] for anything outside user/admin/moderator.
    pub fn set_role(&mut self, role: &str) -> crate::Result<()> {
        self.role = role.parse()?;
        Ok(())
    }
}
