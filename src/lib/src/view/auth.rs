use serde::{Deserialize, Serialize};

use crate::model::User;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login` and `POST /auth/register`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// `GET /auth/profile` returns either the bare user or `{user}`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ProfileResponse {
    Wrapped { user: User },
    Bare(User),
}

impl ProfileResponse {
    pub fn into_user(self) -> User {
        match self {
            ProfileResponse::Wrapped { user } => user,
            ProfileResponse::Bare(user) => user,
        }
    }
}
