//! Auth data models.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;

/// Name of the identity provider role that unlocks administrative actions.
pub const ADMIN_ROLE: &str = "admin";

/// Identity provider user identifier.
///
/// Treated as an opaque string and compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Role assigned to a user by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Whether any of the roles is the admin role.
#[must_use]
pub fn has_admin_role(roles: &[Role]) -> bool {
    roles.iter().any(|role| role.name == ADMIN_ROLE)
}
