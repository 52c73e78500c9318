//! `toolcrib-core` — shared foundation for the workshop inventory core.
//!
//! Contains the error model every operation reports through, and the
//! explicit storage-location configuration (no ambient file paths).

pub mod config;
pub mod error;

pub use config::DataPaths;
pub use error::{CoreError, CoreResult};
