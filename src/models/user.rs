use serde::{Deserialize, Serialize};

/// An employee as returned by `GET /api/v1/Users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID", alias = "id", default)]
    pub id: Option<i64>,

    #[serde(rename = "FullName", alias = "fullName")]
    pub full_name: String,

    #[serde(rename = "Contacts", alias = "contacts", default)]
    pub contacts: Option<String>,

    #[serde(rename = "Role", alias = "role", default)]
    pub role: Option<String>,
}

impl User {
    pub fn new(full_name: &str, role: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            role: Some(role.to_string()),
            ..Default::default()
        }
    }

    /// Case-insensitive role match against any of `roles`.
    pub fn has_any_role(&self, roles: &[String]) -> bool {
        match self.role.as_deref().map(str::trim) {
            Some(r) => roles.iter().any(|wanted| wanted.trim().to_lowercase() == r.to_lowercase()),
            None => false,
        }
    }
}
