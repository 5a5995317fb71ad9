use crate::data::filter::{filtered_indices, FilterSpec};
use crate::data::model::{Catalog, MovieRecord};
use crate::data::rng::SimpleRng;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// One browsing session: the catalog loaded once and held read-only, the
/// current filter selections, and the cached result of applying them.
///
/// The catalog never changes after construction; only the spec and the
/// derived `visible` indices do. Anything shared across sessions (the
/// catalog) stays immutable; everything mutable here is per-session.
pub struct SessionState {
    catalog: Catalog,
    spec: FilterSpec,
    /// Indices of records passing the current spec, ranked (cached).
    visible: Vec<usize>,
    rng: SimpleRng,
}

impl SessionState {
    /// Start a session over a loaded catalog. `rng_seed` drives only the
    /// random-pick action.
    pub fn new(catalog: Catalog, rng_seed: u64) -> Self {
        let visible = filtered_indices(&catalog, &FilterSpec::default());
        SessionState {
            catalog,
            spec: FilterSpec::default(),
            visible,
            rng: SimpleRng::new(rng_seed),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Replace the whole filter spec and recompute the visible set.
    pub fn set_spec(&mut self, spec: FilterSpec) {
        self.spec = spec;
        self.refilter();
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.spec.language = language;
        self.refilter();
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.spec.genre = genre;
        self.refilter();
    }

    pub fn set_actor(&mut self, actor: Option<String>) {
        self.spec.actor = actor;
        self.refilter();
    }

    pub fn set_actress(&mut self, actress: Option<String>) {
        self.spec.actress = actress;
        self.refilter();
    }

    pub fn set_year_range(&mut self, range: Option<(i32, i32)>) {
        self.spec.year_range = range;
        self.refilter();
    }

    pub fn set_rating_min(&mut self, min: Option<f64>) {
        self.spec.rating_min = min;
        self.refilter();
    }

    /// Back to all-wildcard.
    pub fn reset_filters(&mut self) {
        self.set_spec(FilterSpec::default());
    }

    /// The current filtered, ranked view.
    pub fn results(&self) -> Vec<&MovieRecord> {
        self.visible
            .iter()
            .map(|&i| &self.catalog.records[i])
            .collect()
    }

    /// Number of records in the current view.
    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    /// Random pick over the whole catalog, independent of active filters.
    pub fn random_pick(&mut self) -> Option<&MovieRecord> {
        self.catalog.sample(&mut self.rng)
    }

    fn refilter(&mut self) {
        self.visible = filtered_indices(&self.catalog, &self.spec);
        log::debug!(
            "filter pass: {} of {} records visible",
            self.visible.len(),
            self.catalog.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, language: &str, rating: f64) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {id}"),
            year: 2000 + id as i32,
            genre: "Drama".to_string(),
            language: language.to_string(),
            rating,
            actor: "Actor".to_string(),
            actress: "Actress".to_string(),
            poster_url: String::new(),
        }
    }

    fn session() -> SessionState {
        let catalog = Catalog::from_records(vec![
            record(1, "Hindi", 9.0),
            record(2, "English", 7.5),
            record(3, "Hindi", 8.1),
        ]);
        SessionState::new(catalog, 42)
    }

    #[test]
    fn starts_with_everything_visible_and_ranked() {
        let state = session();
        let ids: Vec<u32> = state.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn setters_refilter_the_view() {
        let mut state = session();
        state.set_language(Some("Hindi".to_string()));
        assert_eq!(state.result_count(), 2);

        state.set_rating_min(Some(8.5));
        let ids: Vec<u32> = state.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);

        state.reset_filters();
        assert_eq!(state.result_count(), 3);
        assert!(state.spec().is_all());
    }

    #[test]
    fn random_pick_ignores_active_filters() {
        let mut state = session();
        state.set_language(Some("Nowhere".to_string()));
        assert_eq!(state.result_count(), 0);
        // The pick still draws from the full catalog.
        assert!(state.random_pick().is_some());
    }
}
