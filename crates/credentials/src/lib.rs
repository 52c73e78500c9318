//! `toolcrib-credentials` — user accounts, registration, and login.
//!
//! Accounts are persisted as one keyed JSON document (username ->
//! account). Unlike the system this replaces, the stored credential is
//! a salted SHA-256 hash, not the plain password; the `register`/
//! `login` contract is unchanged.

pub mod account;
pub mod password;
pub mod store;

pub use account::UserAccount;
pub use store::CredentialStore;
