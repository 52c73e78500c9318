//! `toolcrib-report` — point-in-time inventory report export.
//!
//! Aggregates an inventory snapshot into totals and renders a
//! fixed-width tabular document, persisted under a timestamped
//! filename. The artifact is write-once; the core never reads it back.

pub mod generator;

pub use generator::{ReportArtifact, ReportGenerator, ReportTotals};
