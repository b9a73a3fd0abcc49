//! Domain model for category records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep input shapes (drafts, patches) separate from persisted records.
//!
//! # Invariants
//! - Every persisted category is identified by a store-assigned `CategoryId`.
//! - Deletion is a hard delete, guarded by the product reference check.

pub mod category;
