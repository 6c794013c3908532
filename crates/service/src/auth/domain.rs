use serde::{Deserialize, Serialize};

/// Login input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Roster entry as stored (plaintext password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRecord {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Public view of a staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: i32,
    pub email: String,
    pub role: String,
}

impl From<StaffRecord> for StaffUser {
    fn from(r: StaffRecord) -> Self {
        StaffUser { id: r.id, email: r.email, role: r.role }
    }
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: StaffUser,
}
