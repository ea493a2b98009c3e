use crate::metadata::TableMetadata;
use squadup_structs::Structured;

/// A registered user.
#[derive(Structured, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    #[field(embed)]
    pub meta: TableMetadata,
    #[field(tag = "id")]
    pub id: i64,
    #[field(tag = "first_name")]
    pub first_name: String,
    #[field(tag = "last_name")]
    pub last_name: String,
    #[field(tag = "email")]
    pub email: String,
    #[field(tag = "profile_picture_url")]
    pub profile_picture_url: String,
}

/// Result of a successful login: the user snapshot plus the issued session token.
#[derive(Structured, Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    #[field(embed)]
    pub user: User,
    #[field(tag = "token")]
    pub token: String,
}

impl LoginResult {
    #[must_use]
    pub const fn new(user: User, token: String) -> Self {
        Self { user, token }
    }
}
