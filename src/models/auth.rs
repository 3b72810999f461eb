use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned after a successful login: the reporter's public profile fields
/// plus the freshly issued access token. The password hash never appears
/// here.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub access_token: String,
    pub token_type: String,
}
