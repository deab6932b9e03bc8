//! Dedup-by-language rules for metadata queries.
//!
//! Two call sites collapse multiple records for the same movie and language
//! into one representative, and they do not use the same selection rule:
//!
//! - the stats lookup keeps the first-encountered record in record-id order
//!   (lowest id wins) and applies no completeness filtering;
//! - the single-movie lookup selects per [`ResolvePolicy`], then drops
//!   incomplete records and sorts survivors by language.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::MovieRecord;

/// Which record represents a language when a movie has several for it.
///
/// `Oldest` keeps the record with the lowest id, which is what the upstream
/// system actually does; its documentation claims the latest record should
/// win, which `Latest` provides. See DESIGN.md for the discrepancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvePolicy {
    /// Lowest record id per language wins.
    #[default]
    Oldest,
    /// Highest record id per language wins.
    Latest,
}

/// Stats-path dedup: keep the lowest-id record per language.
///
/// Output is ordered by record id. Incomplete records are not filtered on
/// this path; the stats report knowingly carries them through.
pub fn dedup_by_language(mut records: Vec<(u64, MovieRecord)>) -> Vec<MovieRecord> {
    records.sort_by_key(|(id, _)| *id);

    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for (_, record) in records {
        if seen.iter().any(|language| *language == record.language) {
            continue;
        }
        seen.push(record.language.clone());
        out.push(record);
    }
    out
}

/// Single-movie resolution: one record per language per `policy`, incomplete
/// survivors dropped, result sorted ascending (case-sensitive) by language.
pub fn resolve_movie(records: Vec<(u64, MovieRecord)>, policy: ResolvePolicy) -> Vec<MovieRecord> {
    let mut by_language: BTreeMap<String, (u64, MovieRecord)> = BTreeMap::new();

    for (id, record) in records {
        match by_language.entry(record.language.clone()) {
            Entry::Vacant(slot) => {
                slot.insert((id, record));
            }
            Entry::Occupied(mut slot) => {
                let replace = match policy {
                    ResolvePolicy::Oldest => id < slot.get().0,
                    ResolvePolicy::Latest => id > slot.get().0,
                };
                if replace {
                    slot.insert((id, record));
                }
            }
        }
    }

    // BTreeMap iteration gives the by-language ordering for free.
    by_language
        .into_values()
        .map(|(_, record)| record)
        .filter(MovieRecord::is_complete)
        .collect()
}
