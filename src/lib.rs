//! Browsing and filtering core for a small in-memory movie catalog.
//!
//! The library exposes pure functions over plain data (a read-only
//! [`Catalog`](data::model::Catalog), per-interaction
//! [`FilterSpec`](data::filter::FilterSpec)s, and count-based aggregate
//! tables) so any front end can drive it: the bundled CLI, a web layer, or
//! a test harness.

pub mod data;
pub mod state;

pub use data::filter::{apply, FilterSpec};
pub use data::loader::{fallback_catalog, load, LoadError, DEFAULT_CATALOG_PATH};
pub use data::model::{Catalog, MovieRecord};
pub use data::stats::{genre_distribution, language_distribution, top_actors, TOP_ACTORS_DEFAULT};
pub use state::SessionState;
