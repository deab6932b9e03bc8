//! CSV record parsing for the two bulk data sources.
//!
//! Lines are split on a fixed `,` with no quoting or escaping support. A
//! field that itself contains the delimiter shifts the remaining columns and
//! the row is silently dropped by the numeric checks; this is a documented
//! limitation of the source format, not something the parser repairs.
//!
//! Malformed rows never abort a load: each decoder returns `None` and the
//! caller moves on to the next line.

use super::types::MovieRecord;

/// Column delimiter for both sources.
const DELIMITER: char = ',';

/// One decoded data line of the metadata source.
///
/// Column order: `[unused, movieId, title, language, duration, releaseYear]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    /// Source line index (header = 0); becomes the record id.
    pub line: u64,
    pub record: MovieRecord,
}

impl MetadataRow {
    /// Decode a single data line.
    ///
    /// The row is kept only when the movie id parses; if the movie id parses
    /// but the release year does not, the whole row is dropped (no partial
    /// insert). Title, language and duration are taken verbatim.
    fn decode(line: u64, raw: &str) -> Option<Self> {
        let cells: Vec<&str> = raw.split(DELIMITER).collect();

        let movie_id: i64 = cells.get(1)?.trim().parse().ok()?;
        let title = (*cells.get(2)?).to_string();
        let language = (*cells.get(3)?).to_string();
        let duration = (*cells.get(4)?).to_string();
        let release_year: i32 = cells.get(5)?.trim().parse().ok()?;

        Some(Self {
            line,
            record: MovieRecord {
                movie_id,
                title,
                language,
                duration,
                release_year,
            },
        })
    }
}

/// One decoded data line of the stats source.
///
/// Column order: `[movieId, durationMs]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchRow {
    pub movie_id: i64,
    pub duration_ms: i64,
}

impl WatchRow {
    /// Decode a single data line; both fields must parse as integers.
    fn decode(raw: &str) -> Option<Self> {
        let mut cells = raw.split(DELIMITER);
        let movie_id: i64 = cells.next()?.trim().parse().ok()?;
        let duration_ms: i64 = cells.next()?.trim().parse().ok()?;
        Some(Self {
            movie_id,
            duration_ms,
        })
    }
}

/// Iterate the data lines of the metadata source, skipping the header line
/// and every row that fails to decode.
pub fn metadata_rows(text: &str) -> impl Iterator<Item = MetadataRow> + '_ {
    text.lines()
        .enumerate()
        .skip(1)
        .filter_map(|(line, raw)| MetadataRow::decode(line as u64, raw))
}

/// Iterate the data lines of the stats source, skipping the header line and
/// every row that fails to decode.
pub fn watch_rows(text: &str) -> impl Iterator<Item = WatchRow> + '_ {
    text.lines().skip(1).filter_map(WatchRow::decode)
}
