use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row type that lives in a named table.
pub trait Row: Serialize {
    const TABLE: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Trainer,
    Client,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Trainer => "trainer",
            UserRole::Client => "client",
            UserRole::Admin => "admin",
        }
    }
}

/// Application-side extension of an auth identity.
///
/// The auth user itself is created by the identity provider; this row only
/// attaches a role and the CRM contact it maps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserExt {
    pub user_id: Uuid,
    pub role: UserRole,
    pub ghl_contact_id: String,
}

impl Row for UserExt {
    const TABLE: &'static str = "users_ext";
}

/// Public-facing trainer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub user_id: Uuid,
    pub slug: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    pub specialties: Vec<String>,
    pub accepts_minors: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
}

impl Row for Trainer {
    const TABLE: &'static str = "trainers";
}
