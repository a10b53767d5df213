use serde::{Deserialize, Serialize};

/// Access level of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Ids of the users this user follows, in the order they were followed.
    pub following: Vec<String>,
}

/// Payload for `POST /api/users`.
///
/// Only these three fields are read from the request body. Anything else the
/// caller sends (`role`, `following`, ...) is dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCreate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Public projection of a user returned by the read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Builds a brand-new user from the signup fields only.
    ///
    /// This is the allow-list for account creation: role is always
    /// [`Role::User`] and the following list always starts empty, whatever
    /// the caller asked for.
    pub fn from_signup(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: Role::User,
            following: Vec::new(),
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
