//! Projection report emitters — console table rendering and artifact
//! persistence (JSON bundle, CSV row table, narrative text report).
//!
//! Pure formatting over a completed report; every number is read here,
//! never derived.

pub mod artifacts;
pub mod table;

pub use artifacts::{persist_report, PersistedArtifacts};
pub use table::render_projection_table;
