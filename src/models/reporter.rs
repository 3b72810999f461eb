use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reporter account. The full record lives in the credential store and is
/// only ever handed to the auth layer; the password hash is excluded from
/// every serialized response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reporter {
    pub id: Uuid,
    /// Unique and immutable after creation.
    pub username: String,
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Disabled reporters can still log in but may not act.
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a reporter, the only shape exposed by the auth
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterProfile {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub company: String,
}

impl From<&Reporter> for ReporterProfile {
    fn from(r: &Reporter) -> Self {
        Self {
            id: r.id,
            username: r.username.clone(),
            name: r.name.clone(),
            email: r.email.clone(),
            company: r.company.clone(),
        }
    }
}
