//! `toolcrib-inventory` — component records and the inventory store.
//!
//! One keyed JSON document (component name -> record), listed in
//! document order, mutated in place through validated updates that
//! flag any rise in the non-working count.

pub mod catalog;
pub mod record;
pub mod store;

pub use record::ComponentRecord;
pub use store::{InventoryStore, Regression, UpdateOutcome};
