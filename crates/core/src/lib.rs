//! # Patternbook Core
//!
//! Business logic for the Patternbook design patterns guide: the immutable
//! pattern catalog, slug derivation and lookup, the view selection state
//! machine, and the pluggable syntax highlighter.
//!
//! ## Architecture
//!
//! - `catalog` - The `Catalog` store, `PatternRecord`, categories, integrity checks
//! - `slug` - `slugify` and catalog lookup by slug
//! - `view` - Overview/Detail/NotFound selection state machine and page metadata
//! - `highlight` - `Highlighter` capability with span and plain implementations
//!
//! ## Usage
//!
//! ```rust
//! use patternbook_core::{Catalog, View};
//!
//! let catalog = Catalog::builtin();
//! let view = View::for_slug(&catalog, Some("abstract-factory"));
//! assert!(matches!(view, View::Detail(_)));
//! ```

pub mod catalog;
mod dataset;
pub mod highlight;
pub mod slug;
pub mod view;

pub use catalog::{Catalog, CatalogError, Category, PatternRecord};
pub use highlight::{Highlighter, PlainHighlighter, SpanHighlighter};
pub use slug::slugify;
pub use view::{PageMeta, View, ViewState};
