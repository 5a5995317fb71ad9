use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::rng::SimpleRng;

// ---------------------------------------------------------------------------
// MovieRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry. Field names follow the tabular source schema
/// (`movie_id, title, year, genre, language, rating, actor, actress,
/// poster_url`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "movie_id")]
    pub id: u32,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub language: String,
    /// Always within [0, 10]; the loader rejects anything outside.
    pub rating: f64,
    pub actor: String,
    pub actress: String,
    /// Opaque reference string, never dereferenced by the core.
    pub poster_url: String,
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}/{}] {:.1}/10 – {} / {}",
            self.title, self.year, self.language, self.genre, self.rating, self.actor, self.actress
        )
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full in-memory catalog with pre-computed value indices.
///
/// Immutable after construction: loaded once per session and shared
/// read-only, so the distinct-value sets and numeric bounds below never go
/// stale. The sorted sets back a front end's filter option lists; the bounds
/// back its year/rating range controls.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All records, in source order.
    pub records: Vec<MovieRecord>,
    /// Sorted distinct language values.
    pub languages: BTreeSet<String>,
    /// Sorted distinct genre values.
    pub genres: BTreeSet<String>,
    /// Sorted distinct actor names.
    pub actors: BTreeSet<String>,
    /// Sorted distinct actress names.
    pub actresses: BTreeSet<String>,
    /// Inclusive (min, max) release year, None for an empty catalog.
    pub year_bounds: Option<(i32, i32)>,
    /// Inclusive (min, max) rating, None for an empty catalog.
    pub rating_bounds: Option<(f64, f64)>,
}

impl Catalog {
    /// Build the value indices from the loaded records.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let mut languages = BTreeSet::new();
        let mut genres = BTreeSet::new();
        let mut actors = BTreeSet::new();
        let mut actresses = BTreeSet::new();
        let mut year_bounds: Option<(i32, i32)> = None;
        let mut rating_bounds: Option<(f64, f64)> = None;

        for rec in &records {
            languages.insert(rec.language.clone());
            genres.insert(rec.genre.clone());
            actors.insert(rec.actor.clone());
            actresses.insert(rec.actress.clone());

            year_bounds = Some(match year_bounds {
                None => (rec.year, rec.year),
                Some((lo, hi)) => (lo.min(rec.year), hi.max(rec.year)),
            });
            rating_bounds = Some(match rating_bounds {
                None => (rec.rating, rec.rating),
                Some((lo, hi)) => (lo.min(rec.rating), hi.max(rec.rating)),
            });
        }

        Catalog {
            records,
            languages,
            genres,
            actors,
            actresses,
            year_bounds,
            rating_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Uniform random pick over the whole catalog (the "surprise me" action).
    /// Returns `None` only for an empty catalog.
    pub fn sample(&self, rng: &mut SimpleRng) -> Option<&MovieRecord> {
        if self.records.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(self.records.len());
        self.records.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, language: &str, year: i32, rating: f64) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {id}"),
            year,
            genre: "Drama".to_string(),
            language: language.to_string(),
            rating,
            actor: "Actor".to_string(),
            actress: "Actress".to_string(),
            poster_url: format!("https://posters.example/{id}"),
        }
    }

    #[test]
    fn indices_and_bounds_are_computed() {
        let catalog = Catalog::from_records(vec![
            record(1, "Hindi", 2001, 7.5),
            record(2, "Tamil", 1995, 9.2),
            record(3, "Hindi", 2020, 6.0),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.languages.iter().collect::<Vec<_>>(),
            vec!["Hindi", "Tamil"]
        );
        assert_eq!(catalog.year_bounds, Some((1995, 2020)));
        assert_eq!(catalog.rating_bounds, Some((6.0, 9.2)));
    }

    #[test]
    fn empty_catalog_has_no_bounds() {
        let catalog = Catalog::from_records(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.year_bounds, None);
        assert_eq!(catalog.rating_bounds, None);

        let mut rng = SimpleRng::new(7);
        assert!(catalog.sample(&mut rng).is_none());
    }

    #[test]
    fn sample_returns_a_catalog_record() {
        let catalog = Catalog::from_records(vec![
            record(1, "English", 2010, 8.0),
            record(2, "English", 2011, 8.5),
        ]);
        let mut rng = SimpleRng::new(42);
        for _ in 0..20 {
            let pick = catalog.sample(&mut rng).unwrap();
            assert!(catalog.records.contains(pick));
        }
    }
}
