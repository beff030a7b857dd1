//! # Slug Resolution
//!
//! Derives URL-safe slugs from pattern display names and looks records back
//! up by slug. Links, the active-sidebar highlight, and page metadata all go
//! through [`slugify`], so a record is always reachable under exactly the
//! slug its links were built with.

use crate::catalog::{Catalog, PatternRecord};

/// Normalize a display name to a URL slug.
///
/// Lower-cases the name and collapses internal whitespace runs to a single
/// hyphen. Deterministic and total; there is no failure mode.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

impl Catalog {
    /// Look up the record whose slugified name equals `slug` exactly.
    ///
    /// Linear scan in declaration order; the catalog is small and read-only,
    /// so no index is kept. `None` is the not-found signal - callers render
    /// a 404-equivalent state, this never escalates to an error.
    pub fn resolve(&self, slug: &str) -> Option<&PatternRecord> {
        self.iter().find(|record| record.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Abstract Factory"), "abstract-factory");
        assert_eq!(slugify("Chain of Responsibility"), "chain-of-responsibility");
        assert_eq!(slugify("Singleton"), "singleton");
        assert_eq!(slugify("  Template   Method  "), "template-method");
    }

    #[test]
    fn test_slugify_is_stable_on_canonical_names() {
        // A slug derived from a canonical name must map back to that slug
        for record in Catalog::builtin().iter() {
            let slug = slugify(record.name);
            assert_eq!(slugify(&slug), slug);
        }
    }

    #[test]
    fn test_resolve_roundtrip_for_every_record() {
        let catalog = Catalog::builtin();
        for record in catalog.iter() {
            let found = catalog
                .resolve(&slugify(record.name))
                .expect("every record is reachable via its own slug");
            assert_eq!(found, record);
        }
    }

    #[test]
    fn test_resolve_unknown_slug() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve("nonexistent-pattern"), None);
        assert_eq!(catalog.resolve(""), None);
        // Case-sensitive exact match on the normalized string
        assert_eq!(catalog.resolve("Abstract-Factory"), None);
    }

    #[test]
    fn test_resolve_named_examples() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.resolve("abstract-factory").map(|r| r.name),
            Some("Abstract Factory")
        );
        assert_eq!(catalog.resolve("command").map(|r| r.name), Some("Command"));
        assert_eq!(catalog.resolve("iterator").map(|r| r.name), Some("Iterator"));
    }
}
