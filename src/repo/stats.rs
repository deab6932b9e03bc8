//! Viewing-statistics aggregation.
//!
//! Joins the watch-duration index against the metadata store and produces
//! the ranked report: most-watched movies first, newer releases breaking
//! ties, one entry per surviving language variant.

use super::types::{MovieRecord, MovieStat};

/// Produce the ranked stats report.
///
/// `watches` holds one `(movie_id, durations_ms)` group per movie; `lookup`
/// resolves a movie id to its language-deduped metadata (the stats-path
/// rule). Movies that resolve to no metadata at all are omitted; every
/// surviving language variant of a movie shares that movie's watch count and
/// average.
pub fn aggregate<F>(watches: Vec<(i64, Vec<i64>)>, lookup: F) -> Vec<MovieStat>
where
    F: Fn(i64) -> Vec<MovieRecord>,
{
    let mut groups: Vec<(Vec<i64>, Vec<MovieRecord>)> = watches
        .into_iter()
        .filter(|(_, durations)| !durations.is_empty())
        .map(|(movie_id, durations)| (durations, lookup(movie_id)))
        .filter(|(_, records)| !records.is_empty())
        .collect();

    // Watch count descending, then release year descending. The year of the
    // group's first variant (lowest record id) ranks the whole group.
    groups.sort_by(|a, b| {
        b.0.len()
            .cmp(&a.0.len())
            .then_with(|| ranking_year(&b.1).cmp(&ranking_year(&a.1)))
    });

    let mut report = Vec::new();
    for (durations, records) in groups {
        let watches = durations.len() as u64;
        let sum_ms: i64 = durations.iter().sum();
        // Float division then truncating cast, matching the upstream
        // arithmetic exactly: floor(sum / (1000 * n)) for non-negative sums.
        let average_s = (sum_ms as f64 / (1000.0 * durations.len() as f64)) as i64;

        for record in records {
            report.push(MovieStat {
                movie_id: record.movie_id,
                title: record.title,
                average_watch_duration_s: average_s,
                watches,
                release_year: record.release_year,
            });
        }
    }
    report
}

fn ranking_year(records: &[MovieRecord]) -> i32 {
    records.first().map_or(0, |record| record.release_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(movie_id: i64, title: &str, language: &str, release_year: i32) -> MovieRecord {
        MovieRecord {
            movie_id,
            title: title.to_string(),
            language: language.to_string(),
            duration: "1:49:00".to_string(),
            release_year,
        }
    }

    #[test]
    fn elysium_example() {
        // Two watch events of 120s and 180s average to 150s, reported once
        // per language variant.
        let watches = vec![(3, vec![120_000, 180_000])];
        let report = aggregate(watches, |id| {
            vec![
                record(id, "Elysium", "EN", 2013),
                record(id, "Elysium", "FR", 2013),
            ]
        });
        assert_eq!(report.len(), 2);
        for stat in &report {
            assert_eq!(stat.movie_id, 3);
            assert_eq!(stat.title, "Elysium");
            assert_eq!(stat.release_year, 2013);
            assert_eq!(stat.watches, 2);
            assert_eq!(stat.average_watch_duration_s, 150);
        }
    }

    #[test]
    fn average_truncates_toward_zero() {
        let report = aggregate(vec![(1, vec![1999])], |id| vec![record(id, "T", "EN", 2001)]);
        assert_eq!(report[0].average_watch_duration_s, 1);
    }

    #[test]
    fn ordered_by_watch_count_descending() {
        let watches = vec![(1, vec![1000]), (2, vec![1000, 1000, 1000]), (3, vec![1000, 1000])];
        let report = aggregate(watches, |id| vec![record(id, "T", "EN", 2000)]);
        let ids: Vec<i64> = report.iter().map(|s| s.movie_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn release_year_breaks_watch_count_ties() {
        let watches = vec![(1, vec![1000]), (2, vec![1000]), (3, vec![1000])];
        let report = aggregate(watches, |id| {
            let year = match id {
                1 => 1999,
                2 => 2015,
                _ => 2007,
            };
            vec![record(id, "T", "EN", year)]
        });
        let ids: Vec<i64> = report.iter().map(|s| s.movie_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn movies_without_metadata_are_omitted() {
        let watches = vec![(1, vec![1000]), (2, vec![1000, 1000])];
        let report = aggregate(watches, |id| {
            if id == 1 {
                vec![record(id, "T", "EN", 2000)]
            } else {
                Vec::new()
            }
        });
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].movie_id, 1);
    }

    #[test]
    fn empty_index_yields_empty_report() {
        let report = aggregate(Vec::new(), |_| vec![record(1, "T", "EN", 2000)]);
        assert!(report.is_empty());
    }
}
