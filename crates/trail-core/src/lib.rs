//! # trail-core
//!
//! Wire types shared by the audit trail client crates.
//!
//! - [`AuditTrailEntry`]: one immutable record of a user action against an entity
//! - [`AuditTrailFilter`]: optional constraints for the filtered query endpoint
//!
//! Both types carry `serde` and `schemars` derives. Their JSON shape is the
//! compatibility surface with the audit trail server and must not drift.

pub mod entry;
pub mod filter;

pub use entry::AuditTrailEntry;
pub use filter::AuditTrailFilter;
