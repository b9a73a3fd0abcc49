//! Category use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD and search entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::category::{
    Category, CategoryColumn, CategoryId, CategoryPatch, NewCategory, CATEGORY_COLUMNS,
};
use crate::repo::category_repo::{CategoryRepository, RepoResult};

/// Use-case service wrapper for category operations.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a category from partial input, template-filling missing
    /// fields. Returns the store-assigned ID.
    pub fn add_category(&self, draft: &NewCategory) -> RepoResult<CategoryId> {
        self.repo.create_category(draft)
    }

    /// Creates a category from a code and display name.
    ///
    /// # Contract
    /// - Both fields are taken as-is; no normalization is applied.
    /// - Returns the store-assigned ID.
    pub fn add_named_category(
        &self,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> RepoResult<CategoryId> {
        self.repo.create_category(&NewCategory {
            code: Some(code.into()),
            name: Some(name.into()),
        })
    }

    /// Gets one category by ID; `None` when absent.
    pub fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        self.repo.get_category(id)
    }

    /// Lists every category in stable ID order.
    pub fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.repo.list_categories()
    }

    /// Applies a partial update; returns the affected-row count.
    ///
    /// A count of `0` means the ID does not exist and is not an error.
    pub fn update_category(&self, id: CategoryId, patch: &CategoryPatch) -> RepoResult<usize> {
        self.repo.update_category(id, patch)
    }

    /// Deletes a category unless products still reference it.
    ///
    /// Returns repository-level `CategoryInUse` errors unchanged.
    pub fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        self.repo.delete_category(id)
    }

    /// Case-insensitive substring search over category code and name.
    pub fn search_categories(&self, query: &str) -> RepoResult<Vec<Category>> {
        self.repo.search_categories(query)
    }

    /// Column display metadata for table views.
    ///
    /// Row re-keying to display headers belongs to the presentation layer;
    /// core only hands out the declared mapping.
    pub fn category_columns(&self) -> &'static [CategoryColumn] {
        CATEGORY_COLUMNS
    }
}
