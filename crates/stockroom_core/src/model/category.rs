//! Category domain model.
//!
//! # Responsibility
//! - Define the persisted category record and its input shapes.
//! - Provide the default template merged under partial creation input.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never reused.
//! - `code`/`name` presence is not enforced at this layer; the schema's
//!   column defaults are the source of truth for missing fields.

use serde::{Deserialize, Serialize};

/// Store-assigned numeric identifier for a category row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CategoryId = i64;

/// Persisted category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Category {
    /// Stable row ID used for product references.
    pub id: CategoryId,
    /// Human-readable short identifier, e.g. `"FRUIT"`.
    pub code: String,
    /// Display label.
    pub name: String,
}

/// Creation input for a category.
///
/// Fields left as `None` are filled from [`NewCategory::TEMPLATE`] before
/// insert; caller-supplied fields win on conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewCategory {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Template values applied to unspecified creation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    pub code: &'static str,
    pub name: &'static str,
}

impl NewCategory {
    /// Default field values for categories created from partial input.
    pub const TEMPLATE: CategoryTemplate = CategoryTemplate { code: "", name: "" };

    /// Resolves this draft into concrete column values, template-filled.
    pub fn resolve(&self) -> (String, String) {
        let code = self
            .code
            .clone()
            .unwrap_or_else(|| Self::TEMPLATE.code.to_string());
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| Self::TEMPLATE.name.to_string());
        (code, name)
    }
}

/// Partial update for an existing category.
///
/// Fields left as `None` are not touched by the update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryPatch {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Declared display metadata for one category column.
///
/// Mirrors the schema's indexed columns. Header remapping of rows is a
/// presentation concern; core only exposes the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryColumn {
    /// Stored field key.
    pub key: &'static str,
    /// Display header shown by table views.
    pub header: &'static str,
}

/// Column metadata for the categories table, in declaration order.
pub const CATEGORY_COLUMNS: &[CategoryColumn] = &[
    CategoryColumn {
        key: "id",
        header: "ID",
    },
    CategoryColumn {
        key: "code",
        header: "Code",
    },
    CategoryColumn {
        key: "name",
        header: "Name",
    },
];

#[cfg(test)]
mod tests {
    use super::{NewCategory, CATEGORY_COLUMNS};

    #[test]
    fn resolve_fills_missing_fields_from_template() {
        let draft = NewCategory {
            code: Some("FRUIT".to_string()),
            name: None,
        };
        let (code, name) = draft.resolve();
        assert_eq!(code, "FRUIT");
        assert_eq!(name, NewCategory::TEMPLATE.name);
    }

    #[test]
    fn resolve_prefers_caller_fields_over_template() {
        let draft = NewCategory {
            code: Some("VEG".to_string()),
            name: Some("Vegetables".to_string()),
        };
        assert_eq!(draft.resolve(), ("VEG".to_string(), "Vegetables".to_string()));
    }

    #[test]
    fn column_metadata_covers_declared_indexes() {
        let keys: Vec<&str> = CATEGORY_COLUMNS.iter().map(|column| column.key).collect();
        assert_eq!(keys, vec!["id", "code", "name"]);
    }
}
