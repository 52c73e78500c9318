//! Storage-location configuration.
//!
//! The stores take their file locations from an explicit [`DataPaths`]
//! value instead of hard-coding current-directory filenames, so tests
//! and deployments can point the whole system at any directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TOOLCRIB_DATA_DIR";

const CREDENTIALS_FILE: &str = "users.json";
const INVENTORY_FILE: &str = "inventory.json";
const REPORTS_DIR: &str = "reports";

/// Locations of the persisted documents and the report output
/// directory, all rooted at a single data directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataPaths {
    data_dir: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read the data directory from `TOOLCRIB_DATA_DIR`, defaulting to
    /// the current directory.
    pub fn from_env() -> Self {
        let dir = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| ".".to_string());
        Self::new(dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The credential document (username -> account).
    pub fn credentials_file(&self) -> PathBuf {
        self.data_dir.join(CREDENTIALS_FILE)
    }

    /// The inventory document (component name -> record).
    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_FILE)
    }

    /// Directory report artifacts are written into.
    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir.join(REPORTS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_at_data_dir() {
        let paths = DataPaths::new("/var/lib/toolcrib");
        assert_eq!(
            paths.credentials_file(),
            PathBuf::from("/var/lib/toolcrib/users.json")
        );
        assert_eq!(
            paths.inventory_file(),
            PathBuf::from("/var/lib/toolcrib/inventory.json")
        );
        assert_eq!(
            paths.reports_dir(),
            PathBuf::from("/var/lib/toolcrib/reports")
        );
    }
}
