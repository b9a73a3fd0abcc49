//! Core domain logic for the stockroom category store.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{
    Category, CategoryColumn, CategoryId, CategoryPatch, NewCategory, CATEGORY_COLUMNS,
};
pub use repo::category_repo::{
    CategoryRepository, RepoError, RepoResult, SqliteCategoryRepository,
};
pub use service::category_service::CategoryService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
