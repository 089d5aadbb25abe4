use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Body returned by both `/auth/login` and `/auth/signin`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GoogleLoginResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleLoginRequest {
    pub token: String,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    User,
}

impl Role {
    /// Accounts that own a place to publish sign up as owners.
    pub fn from_has_place(has_place: bool) -> Self {
        if has_place {
            Role::Owner
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::User => "USER",
        }
    }
}
