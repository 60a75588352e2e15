use serde::{Deserialize, Serialize};

/// The session's user, as reported by `GET /api-auth/user/`.
///
/// An anonymous session comes back without a username; `serde(default)`
/// maps that to an empty string rather than a parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
}

/// Login form payload for `POST /api-auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
