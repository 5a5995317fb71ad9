use std::collections::BTreeMap;

use super::model::Catalog;

// ---------------------------------------------------------------------------
// Aggregate summaries
// ---------------------------------------------------------------------------
//
// All three summaries run over the *full* catalog, never the filtered view:
// the charts a front end draws from them show the whole population, not the
// current query's subset. Pure functions, cheap enough to recompute on every
// render at this catalog size.

/// Record count per distinct language. Values sum to `catalog.len()`.
pub fn language_distribution(catalog: &Catalog) -> BTreeMap<String, usize> {
    count_by(catalog, |rec| &rec.language)
}

/// Record count per distinct genre. Values sum to `catalog.len()`.
pub fn genre_distribution(catalog: &Catalog) -> BTreeMap<String, usize> {
    count_by(catalog, |rec| &rec.genre)
}

/// The `n` actors with the most catalog entries, count descending.
/// Equal counts tie-break alphabetically so the ranking is reproducible.
pub fn top_actors(catalog: &Catalog, n: usize) -> Vec<(String, usize)> {
    let counts = count_by(catalog, |rec| &rec.actor);
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

/// Default cut-off for [`top_actors`].
pub const TOP_ACTORS_DEFAULT: usize = 10;

fn count_by<'a, F>(catalog: &'a Catalog, key: F) -> BTreeMap<String, usize>
where
    F: Fn(&'a super::model::MovieRecord) -> &'a String,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for rec in &catalog.records {
        *counts.entry(key(rec).clone()).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MovieRecord;

    fn record(id: u32, language: &str, genre: &str, actor: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {id}"),
            year: 2000,
            genre: genre.to_string(),
            language: language.to_string(),
            rating: 7.0,
            actor: actor.to_string(),
            actress: "Actress".to_string(),
            poster_url: String::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            record(1, "Hindi", "Drama", "Aamir Khan"),
            record(2, "Hindi", "Comedy", "Aamir Khan"),
            record(3, "English", "Drama", "Tom Hanks"),
            record(4, "Tamil", "Action", "Vijay"),
            record(5, "Tamil", "Drama", "Vijay"),
            record(6, "Tamil", "Drama", "Dhanush"),
        ])
    }

    #[test]
    fn language_counts_sum_to_catalog_len() {
        let catalog = sample_catalog();
        let dist = language_distribution(&catalog);
        assert_eq!(dist.get("Hindi"), Some(&2));
        assert_eq!(dist.get("English"), Some(&1));
        assert_eq!(dist.get("Tamil"), Some(&3));
        assert_eq!(dist.values().sum::<usize>(), catalog.len());
    }

    #[test]
    fn genre_counts_sum_to_catalog_len() {
        let catalog = sample_catalog();
        let dist = genre_distribution(&catalog);
        assert_eq!(dist.get("Drama"), Some(&4));
        assert_eq!(dist.values().sum::<usize>(), catalog.len());
    }

    #[test]
    fn top_actors_ranked_and_truncated() {
        let catalog = sample_catalog();
        let top = top_actors(&catalog, 2);
        // Aamir Khan and Vijay both have 2; alphabetical tie-break.
        assert_eq!(
            top,
            vec![("Aamir Khan".to_string(), 2), ("Vijay".to_string(), 2)]
        );

        let all = top_actors(&catalog, TOP_ACTORS_DEFAULT);
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(all.iter().map(|(_, c)| c).sum::<usize>() <= catalog.len());
    }

    #[test]
    fn empty_catalog_yields_empty_summaries() {
        let catalog = Catalog::from_records(Vec::new());
        assert!(language_distribution(&catalog).is_empty());
        assert!(genre_distribution(&catalog).is_empty());
        assert!(top_actors(&catalog, 10).is_empty());
    }
}
