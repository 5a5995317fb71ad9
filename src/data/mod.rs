//! Data layer: core types, loading, filtering, and aggregation.
//!
//! Architecture:
//! ```text
//!  movies_data.csv / .json       (absent → generated fallback)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse or synthesize → Catalog
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Catalog  │  Vec<MovieRecord>, distinct-value and bounds indices
//!   └──────────┘
//!        │
//!        ├──────────────────────────────┐
//!        ▼                              ▼
//!   ┌──────────┐                   ┌──────────┐
//!   │  filter   │  FilterSpec →    │  stats    │  full-catalog
//!   │           │  ranked records  │           │  distributions
//!   └──────────┘                   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod rng;
pub mod stats;
