//! Account record persisted in the credential document.

use serde::{Deserialize, Serialize};

/// One registered user.
///
/// The document key is the username, so it is not repeated inside the
/// record; the in-memory value carries it for callers. The persisted
/// `password` field holds the salted hash (`<salt_hex>$<digest_hex>`),
/// never the plain password.
///
/// # Invariants
/// - Usernames are unique across the whole credential document.
/// - Accounts are immutable after registration (no edit or delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAccount {
    #[serde(rename = "password")]
    pub password_hash: String,
    pub teacher_name: String,
    pub branch_name: String,
}

/// An authenticated account, as returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: String,
    pub teacher_name: String,
    pub branch_name: String,
}

impl UserAccount {
    pub(crate) fn from_stored(username: String, stored: &StoredAccount) -> Self {
        Self {
            username,
            teacher_name: stored.teacher_name.clone(),
            branch_name: stored.branch_name.clone(),
        }
    }
}
