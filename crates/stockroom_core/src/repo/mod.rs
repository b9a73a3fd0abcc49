//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Category deletion must enforce the product reference check.
//! - Repository APIs return semantic errors (`CategoryInUse`) in addition to
//!   DB transport errors.

pub mod category_repo;
