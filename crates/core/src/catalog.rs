//! # Pattern Catalog
//!
//! The immutable store of pattern records. The catalog is built once at
//! startup from the fixed dataset and never mutated afterwards; insertion
//! order is the visible sidebar order and must be preserved.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::dataset;
use crate::slug::slugify;

/// Pattern category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    /// All categories, in chart/legend order
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }
}

/// One catalog entry describing a single design pattern.
///
/// The code samples are opaque display payloads. They are highlighted for
/// presentation but never parsed or executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternRecord {
    /// Display name, unique across the catalog after slug normalization
    pub name: &'static str,
    /// Category the pattern belongs to
    pub category: Category,
    /// Free-text description
    pub explanation: &'static str,
    /// The fuller code example
    pub brief_code: &'static str,
    /// The reduced-to-the-core code example
    pub simplest_code: &'static str,
}

impl PatternRecord {
    /// The URL slug this record is reachable under
    pub fn slug(&self) -> String {
        slugify(self.name)
    }
}

/// Integrity defects in catalog data.
///
/// These are data-entry errors in the fixed dataset, not runtime conditions:
/// [`Catalog::verify`] surfaces them at startup and in tests, and the
/// resolver never attempts to repair them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("pattern at index {index} has an empty name")]
    EmptyName { index: usize },
    #[error("pattern `{name}` has an empty explanation")]
    EmptyExplanation { name: String },
    #[error("patterns `{first}` and `{second}` both normalize to slug `{slug}`")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

/// Ordered, immutable collection of pattern records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PatternRecord>,
}

impl Catalog {
    /// The fixed dataset shipped with the application.
    pub fn builtin() -> Self {
        Self {
            records: dataset::BUILTIN.to_vec(),
        }
    }

    /// Build a catalog from explicit records. Used by tests that need
    /// malformed data; production code always goes through [`builtin`].
    ///
    /// [`builtin`]: Catalog::builtin
    pub fn from_records(records: Vec<PatternRecord>) -> Self {
        Self { records }
    }

    /// Records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of records per category, in [`Category::ALL`] order.
    ///
    /// The counts always sum to [`len`](Catalog::len); categories with no
    /// records report zero.
    pub fn category_counts(&self) -> [(Category, usize); 3] {
        let mut by_category: HashMap<Category, usize> = HashMap::new();
        for record in &self.records {
            *by_category.entry(record.category).or_insert(0) += 1;
        }
        Category::ALL.map(|c| (c, by_category.get(&c).copied().unwrap_or(0)))
    }

    /// Check the catalog's integrity invariants: non-empty names and
    /// explanations, and unique slugs after normalization.
    ///
    /// Duplicate slugs would make lookup ambiguous (first match in
    /// declaration order would win), so they are rejected up front rather
    /// than tie-broken at resolve time.
    pub fn verify(&self) -> Result<(), CatalogError> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (index, record) in self.records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if record.explanation.trim().is_empty() {
                return Err(CatalogError::EmptyExplanation {
                    name: record.name.to_string(),
                });
            }
            let slug = record.slug();
            if let Some(first) = seen.get(&slug) {
                return Err(CatalogError::DuplicateSlug {
                    slug,
                    first: first.to_string(),
                    second: record.name.to_string(),
                });
            }
            seen.insert(slug, record.name);
        }
        tracing::debug!(records = self.records.len(), "catalog verified");
        Ok(())
    }
}
