//! Inventory store: ordered listing and validated in-place updates.

use std::path::PathBuf;

use toolcrib_core::{CoreError, CoreResult, DataPaths};
use toolcrib_storage::DocumentFile;

use crate::catalog;
use crate::record::ComponentRecord;

/// A non-working count that rose relative to the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regression {
    pub previous: u32,
    pub current: u32,
}

/// Result of a successful update.
///
/// `regression` is populated iff the new non-working count strictly
/// exceeds the previously stored one. Callers must surface it as a
/// warning alongside the success confirmation, never swallow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub component_name: String,
    pub regression: Option<Regression>,
}

/// Owns the inventory document (component name -> record, in document
/// order).
///
/// Like the credential store, every operation re-reads the whole
/// document and mutations rewrite it in full.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    document: DocumentFile,
}

impl InventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: DocumentFile::new(path),
        }
    }

    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.inventory_file())
    }

    /// First-run seeding with the default workshop catalog. Does
    /// nothing if the document already exists; reads never seed.
    pub fn seed_default(&self) -> CoreResult<bool> {
        self.document.create_if_missing(&catalog::default_catalog())
    }

    /// The full current snapshot, in document order.
    pub fn list(&self) -> CoreResult<Vec<(String, ComponentRecord)>> {
        self.document.load()
    }

    /// Apply a validated update to one component and persist the whole
    /// document.
    ///
    /// The three counts arrive as free-form text: a trimmed empty
    /// string counts as 0, anything that is not a non-negative integer
    /// fails validation naming the field. The component name and
    /// `image_url` are never touched; the reason is stored trimmed.
    pub fn update(
        &self,
        component_name: &str,
        quantity_in_hand: &str,
        number_working: &str,
        number_not_working: &str,
        reason: &str,
    ) -> CoreResult<UpdateOutcome> {
        let quantity_in_hand = parse_count("quantity in hand", quantity_in_hand)?;
        let number_working = parse_count("number working", number_working)?;
        let number_not_working = parse_count("number not working", number_not_working)?;

        let mut records: Vec<(String, ComponentRecord)> = self.document.load()?;
        let record = records
            .iter_mut()
            .find(|(name, _)| name == component_name)
            .map(|(_, record)| record)
            .ok_or_else(|| CoreError::not_found(component_name))?;

        let previous_not_working = record.number_not_working;
        let regression = (number_not_working > previous_not_working).then_some(Regression {
            previous: previous_not_working,
            current: number_not_working,
        });

        record.quantity_in_hand = quantity_in_hand;
        record.number_working = number_working;
        record.number_not_working = number_not_working;
        record.reason = reason.trim().to_string();

        self.document.save(&records)?;

        if let Some(r) = regression {
            tracing::warn!(
                component = component_name,
                previous = r.previous,
                current = r.current,
                "non-working count increased"
            );
        }
        tracing::debug!(component = component_name, "component updated");

        Ok(UpdateOutcome {
            component_name: component_name.to_string(),
            regression,
        })
    }
}

/// Parse a free-form count field: empty means 0, otherwise a
/// non-negative integer.
fn parse_count(field: &str, value: &str) -> CoreResult<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| {
        CoreError::validation(format!("{field} must be a non-negative whole number"))
    })
}
