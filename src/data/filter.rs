use super::model::{Catalog, MovieRecord};

// ---------------------------------------------------------------------------
// FilterSpec – one user query over the catalog
// ---------------------------------------------------------------------------

/// A conjunction of optional constraints. `None` means "All" (no constraint)
/// for that field. Built fresh per interaction from a front end's current
/// selections; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub language: Option<String>,
    pub genre: Option<String>,
    pub actor: Option<String>,
    pub actress: Option<String>,
    /// Inclusive (min, max) release-year window.
    pub year_range: Option<(i32, i32)>,
    /// Inclusive rating floor.
    pub rating_min: Option<f64>,
}

impl FilterSpec {
    /// Whether a record passes every active constraint.
    ///
    /// Equality checks run before the range checks; cheap first, and the
    /// ordering is never visible in the output.
    pub fn matches(&self, rec: &MovieRecord) -> bool {
        if let Some(lang) = &self.language {
            if rec.language != *lang {
                return false;
            }
        }
        if let Some(genre) = &self.genre {
            if rec.genre != *genre {
                return false;
            }
        }
        if let Some(actor) = &self.actor {
            if rec.actor != *actor {
                return false;
            }
        }
        if let Some(actress) = &self.actress {
            if rec.actress != *actress {
                return false;
            }
        }
        if let Some((lo, hi)) = self.year_range {
            if rec.year < lo || rec.year > hi {
                return false;
            }
        }
        if let Some(min) = self.rating_min {
            if rec.rating < min {
                return false;
            }
        }
        true
    }

    /// Whether every field is a wildcard.
    pub fn is_all(&self) -> bool {
        *self == FilterSpec::default()
    }
}

// ---------------------------------------------------------------------------
// Filtering and ranking
// ---------------------------------------------------------------------------

/// Return indices of records passing the spec, ranked by rating descending.
///
/// Equal ratings tie-break ascending by `id`, so the output order is
/// deterministic across runs. A spec value that matches nothing in the
/// catalog's domain yields an empty result, not an error.
pub fn filtered_indices(catalog: &Catalog, spec: &FilterSpec) -> Vec<usize> {
    let mut indices: Vec<usize> = catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| spec.matches(rec))
        .map(|(i, _)| i)
        .collect();

    indices.sort_by(|&a, &b| {
        let ra = &catalog.records[a];
        let rb = &catalog.records[b];
        rb.rating
            .total_cmp(&ra.rating)
            .then_with(|| ra.id.cmp(&rb.id))
    });
    indices
}

/// Like [`filtered_indices`] but resolved to the records themselves.
pub fn apply<'a>(catalog: &'a Catalog, spec: &FilterSpec) -> Vec<&'a MovieRecord> {
    filtered_indices(catalog, spec)
        .into_iter()
        .map(|i| &catalog.records[i])
        .collect()
}
