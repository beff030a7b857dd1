//! # View Selection
//!
//! The state machine behind the main content area: the overview (landing)
//! view, a pattern detail view, or not-found. Selection is driven by the
//! slug in the current route; all transitions are synchronous because the
//! catalog is already resident in memory.

use crate::catalog::{Catalog, PatternRecord};

/// Which view the main content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Landing view: intro copy plus the category distribution chart
    Overview,
    /// One pattern's explanation and code samples
    Detail(&'a PatternRecord),
    /// A non-empty slug that matched nothing. Rendered as a distinct 404
    /// page, never silently collapsed into the overview.
    NotFound,
}

impl<'a> View<'a> {
    /// Resolve a route slug into a view.
    ///
    /// No slug (or an empty one) means no selection and yields the
    /// overview; anything else either resolves to a record or is NotFound.
    pub fn for_slug(catalog: &'a Catalog, slug: Option<&str>) -> View<'a> {
        match slug {
            None => View::Overview,
            Some(s) if s.is_empty() => View::Overview,
            Some(s) => match catalog.resolve(s) {
                Some(record) => View::Detail(record),
                None => View::NotFound,
            },
        }
    }

    /// Title and description for the page `<head>`.
    pub fn meta(&self) -> PageMeta {
        match self {
            View::Overview => PageMeta {
                title: "JavaScript Design Patterns | Home".to_string(),
                description: "A comprehensive interactive guide to JavaScript design \
                              patterns, including code examples and explanations for \
                              each pattern."
                    .to_string(),
            },
            View::Detail(record) => PageMeta {
                title: format!("{} | JavaScript Design Patterns", record.name),
                description: record.explanation.to_string(),
            },
            View::NotFound => PageMeta {
                title: "Pattern Not Found | JavaScript Design Patterns".to_string(),
                description: "Pattern not found. Browse all JavaScript design patterns."
                    .to_string(),
            },
        }
    }
}

/// Page metadata rendered into the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Holds the current selection and applies navigation transitions.
///
/// Each transition fully replaces the previous view; nothing from a prior
/// selection survives into the next one.
#[derive(Debug)]
pub struct ViewState<'a> {
    catalog: &'a Catalog,
    current: View<'a>,
}

impl<'a> ViewState<'a> {
    /// Start at the overview.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            current: View::Overview,
        }
    }

    pub fn current(&self) -> View<'a> {
        self.current
    }

    /// Navigate to a pattern by slug.
    pub fn select_slug(&mut self, slug: &str) {
        self.current = View::for_slug(self.catalog, Some(slug));
    }

    /// Return to the overview.
    pub fn clear_selection(&mut self) {
        self.current = View::Overview;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_is_overview() {
        let catalog = Catalog::builtin();
        assert_eq!(View::for_slug(&catalog, None), View::Overview);
        assert_eq!(View::for_slug(&catalog, Some("")), View::Overview);
    }

    #[test]
    fn test_known_slug_is_detail() {
        let catalog = Catalog::builtin();
        match View::for_slug(&catalog, Some("observer")) {
            View::Detail(record) => assert_eq!(record.name, "Observer"),
            other => panic!("expected Detail, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let catalog = Catalog::builtin();
        assert_eq!(
            View::for_slug(&catalog, Some("nonexistent-pattern")),
            View::NotFound
        );
    }

    #[test]
    fn test_selection_transitions_leave_no_stale_state() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::new(&catalog);

        state.select_slug("command");
        match state.current() {
            View::Detail(record) => assert_eq!(record.name, "Command"),
            other => panic!("expected Detail(Command), got {:?}", other),
        }

        state.select_slug("iterator");
        match state.current() {
            View::Detail(record) => {
                assert_eq!(record.name, "Iterator");
                assert_ne!(record.name, "Command");
            }
            other => panic!("expected Detail(Iterator), got {:?}", other),
        }

        state.clear_selection();
        assert_eq!(state.current(), View::Overview);
    }

    #[test]
    fn test_not_found_is_sticky_until_next_transition() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::new(&catalog);
        state.select_slug("no-such-pattern");
        assert_eq!(state.current(), View::NotFound);
        state.select_slug("builder");
        assert!(matches!(state.current(), View::Detail(_)));
    }

    #[test]
    fn test_page_meta_strings() {
        let catalog = Catalog::builtin();
        assert_eq!(
            View::for_slug(&catalog, None).meta().title,
            "JavaScript Design Patterns | Home"
        );
        assert_eq!(
            View::for_slug(&catalog, Some("singleton")).meta().title,
            "Singleton | JavaScript Design Patterns"
        );
        assert_eq!(
            View::for_slug(&catalog, Some("bogus")).meta().title,
            "Pattern Not Found | JavaScript Design Patterns"
        );
    }
}
