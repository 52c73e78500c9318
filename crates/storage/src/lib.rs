//! `toolcrib-storage` — persisted keyed documents.
//!
//! Both stores persist to a single JSON object per document, read and
//! rewritten whole on every mutation (last-writer-wins, no locking).
//! Key order is part of the contract: it round-trips unchanged.

pub mod document;

pub use document::DocumentFile;
