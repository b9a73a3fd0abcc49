//! Category repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and search APIs over the `categories` table.
//! - Enforce the single cross-table invariant: a category referenced by
//!   products cannot be deleted.
//!
//! # Invariants
//! - `delete_category` runs its reference count and the delete inside one
//!   transaction, so a product insert cannot interleave between them.
//! - Record absence is `None` or a zero count, never an error.

use crate::db::DbError;
use crate::model::category::{Category, CategoryId, CategoryPatch, NewCategory};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CATEGORY_SELECT_SQL: &str = "SELECT id, code, name FROM categories";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for category persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Deletion was blocked because products still reference the category.
    CategoryInUse {
        id: CategoryId,
        product_count: u64,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::CategoryInUse { id, product_count } => write!(
                f,
                "cannot delete category {id}: {product_count} product(s) still reference it"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::CategoryInUse { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for category CRUD and search operations.
pub trait CategoryRepository {
    fn create_category(&self, draft: &NewCategory) -> RepoResult<CategoryId>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn update_category(&self, id: CategoryId, patch: &CategoryPatch) -> RepoResult<usize>;
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
    fn search_categories(&self, query: &str) -> RepoResult<Vec<Category>>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(&self, draft: &NewCategory) -> RepoResult<CategoryId> {
        let (code, name) = draft.resolve();

        self.conn.execute(
            "INSERT INTO categories (code, name) VALUES (?1, ?2);",
            params![code, name],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                &format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_category_row,
            )
            .optional()?;

        Ok(category)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }

    fn update_category(&self, id: CategoryId, patch: &CategoryPatch) -> RepoResult<usize> {
        // updated_at is always touched, so an empty patch is still valid SQL
        // and the affected-row count reflects whether the row exists.
        let mut sql =
            String::from("UPDATE categories SET updated_at = (strftime('%s', 'now') * 1000)");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(code) = &patch.code {
            sql.push_str(", code = ?");
            bind_values.push(Value::Text(code.clone()));
        }
        if let Some(name) = &patch.name {
            sql.push_str(", name = ?");
            bind_values.push(Value::Text(name.clone()));
        }

        sql.push_str(" WHERE id = ?;");
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        Ok(changed)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        let product_count: u64 = tx.query_row(
            "SELECT COUNT(*) FROM products WHERE category_id = ?1;",
            [id],
            |row| row.get(0),
        )?;
        if product_count > 0 {
            // Dropping the uncommitted transaction rolls it back.
            return Err(RepoError::CategoryInUse { id, product_count });
        }

        tx.execute("DELETE FROM categories WHERE id = ?1;", [id])?;
        tx.commit()?;

        Ok(())
    }

    // Unicode-aware case folding happens here rather than in SQL; SQLite's
    // LIKE and lower() only fold ASCII.
    fn search_categories(&self, query: &str) -> RepoResult<Vec<Category>> {
        let needle = query.to_lowercase();
        let categories = self.list_categories()?;

        Ok(categories
            .into_iter()
            .filter(|category| {
                category.code.to_lowercase().contains(&needle)
                    || category.name.to_lowercase().contains(&needle)
            })
            .collect())
    }
}

fn parse_category_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        code: row.get("code")?,
        name: row.get("name")?,
    })
}
