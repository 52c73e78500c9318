//! Credential store: register and login against the persisted
//! username -> account document.

use std::path::PathBuf;

use toolcrib_core::{CoreError, CoreResult, DataPaths};
use toolcrib_storage::DocumentFile;

use crate::account::{StoredAccount, UserAccount};
use crate::password;

/// Owns the credential document.
///
/// Every operation re-reads the backing document in full; there is no
/// in-memory cache, so external edits are visible on the next call and
/// concurrent writers resolve as last-writer-wins.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    document: DocumentFile,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: DocumentFile::new(path),
        }
    }

    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.credentials_file())
    }

    /// First-run setup: create an empty credential document if none
    /// exists. Reads never do this implicitly — a missing document at
    /// read time stays a storage error.
    pub fn initialize(&self) -> CoreResult<bool> {
        self.document.create_if_missing::<StoredAccount>(&[])
    }

    /// Register a new account and persist the whole document.
    ///
    /// All four fields are trimmed; any empty field fails validation.
    /// An existing username fails with `DuplicateUser` and leaves the
    /// document untouched.
    pub fn register(
        &self,
        teacher_name: &str,
        branch_name: &str,
        username: &str,
        password: &str,
    ) -> CoreResult<()> {
        let teacher_name = require("teacher name", teacher_name)?;
        let branch_name = require("branch name", branch_name)?;
        let username = require("username", username)?;
        let password = require("password", password)?;

        let mut accounts: Vec<(String, StoredAccount)> = self.document.load()?;
        if accounts.iter().any(|(name, _)| name == &username) {
            return Err(CoreError::duplicate_user(username));
        }

        accounts.push((
            username.clone(),
            StoredAccount {
                password_hash: password::hash(&password),
                teacher_name,
                branch_name,
            },
        ));
        self.document.save(&accounts)?;

        tracing::info!(%username, "account registered");
        Ok(())
    }

    /// Check a username/password pair against the stored credentials.
    ///
    /// Unknown username and wrong password fail identically
    /// (`Authentication`), so a caller cannot probe for usernames.
    /// Performs no writes.
    pub fn login(&self, username: &str, password: &str) -> CoreResult<UserAccount> {
        let username = require("username", username)?;
        let password = require("password", password)?;

        let accounts: Vec<(String, StoredAccount)> = self.document.load()?;
        let stored = accounts
            .iter()
            .find(|(name, _)| name == &username)
            .map(|(_, stored)| stored)
            .ok_or(CoreError::Authentication)?;

        if !password::verify(&password, &stored.password_hash) {
            return Err(CoreError::Authentication);
        }

        tracing::debug!(%username, "login succeeded");
        Ok(UserAccount::from_stored(username, stored))
    }
}

fn require(field: &str, value: &str) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
