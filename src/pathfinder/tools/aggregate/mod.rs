//! Experience aggregation.
//!
//! Rows whose tag list is exactly the sentinel keyword are credited to every
//! character seen elsewhere in the input; all other rows are credited to the
//! characters they list, once per listed entry.

use tracing::{debug, trace};

use crate::pathfinder::tools::error::{Result, ToolError};
use crate::pathfinder::tools::model::{Aggregation, Record, Tag, TagUniverse, Totals};

/// Default keyword marking a row as global experience.
pub const DEFAULT_SENTINEL: &str = "All";

/// Splits a comma-delimited tag field, trimming each segment.
///
/// Whitespace-only segments survive as empty strings and duplicates are kept,
/// so `"Alice, ,Alice"` yields `["Alice", "", "Alice"]`.
pub fn parse_tags(raw: &str) -> Vec<Tag> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Collects every tag named by any record, minus the sentinel.
pub fn compute_universe(records: &[Record], sentinel: &str) -> TagUniverse {
    let mut universe: TagUniverse = records
        .iter()
        .flat_map(|record| record.tags.iter().cloned())
        .collect();
    universe.remove(sentinel);
    universe
}

/// Replaces an exact `[sentinel]` tag list with the whole universe.
///
/// Lists that merely contain the sentinel are returned untouched.
pub fn expand_sentinel(mut record: Record, universe: &TagUniverse, sentinel: &str) -> Record {
    if record.is_sentinel(sentinel) {
        trace!(row = record.row, tags = universe.len(), "expanding global row");
        record.tags = universe.iter().cloned().collect();
    }
    record
}

/// Sums each record's value into the totals of the tags it lists.
pub fn accumulate(records: &[Record], universe: &TagUniverse) -> Result<Totals> {
    let mut totals: Totals = universe.iter().map(|tag| (tag.clone(), 0.0)).collect();

    for record in records {
        for tag in &record.tags {
            let total = totals.get_mut(tag).ok_or_else(|| ToolError::UnknownTag {
                row: record.row,
                tag: tag.clone(),
            })?;
            *total += record.value;
        }
    }

    Ok(totals)
}

/// Runs universe computation, sentinel expansion and accumulation in order.
pub fn aggregate(records: Vec<Record>, sentinel: &str) -> Result<Aggregation> {
    let universe = compute_universe(&records, sentinel);
    debug!(
        records = records.len(),
        characters = universe.len(),
        "computed character universe"
    );

    let records: Vec<Record> = records
        .into_iter()
        .map(|record| expand_sentinel(record, &universe, sentinel))
        .collect();
    let totals = accumulate(&records, &universe)?;

    Ok(Aggregation {
        records,
        universe,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row: usize, tags: &str, value: f64) -> Record {
        Record::new(row, parse_tags(tags), value)
    }

    #[test]
    fn parse_tags_trims_and_keeps_empty_segments() {
        assert_eq!(parse_tags("Alice, Bob"), vec!["Alice", "Bob"]);
        assert_eq!(parse_tags("  Alice  "), vec!["Alice"]);
        assert_eq!(parse_tags("Alice, ,Bob,"), vec!["Alice", "", "Bob", ""]);
        assert_eq!(parse_tags("   "), vec![""]);
    }

    #[test]
    fn parse_tags_keeps_duplicates() {
        assert_eq!(parse_tags("Bob,Bob"), vec!["Bob", "Bob"]);
    }

    #[test]
    fn universe_never_contains_sentinel() {
        let records = vec![
            record(1, "All", 1.0),
            record(2, "All, Alice", 1.0),
            record(3, "Bob", 1.0),
            record(4, "All", 1.0),
        ];
        let universe = compute_universe(&records, "All");
        assert!(!universe.contains("All"));
        assert_eq!(
            universe.into_iter().collect::<Vec<_>>(),
            vec!["Alice".to_string(), "Bob".to_string()]
        );
    }

    #[test]
    fn expansion_requires_exact_match() {
        let universe: TagUniverse = ["Alice", "Bob"].iter().map(|t| t.to_string()).collect();

        let expanded = expand_sentinel(record(1, "All", 3.0), &universe, "All");
        assert_eq!(expanded.tags, vec!["Alice", "Bob"]);

        let mixed = expand_sentinel(record(2, "All, Alice", 3.0), &universe, "All");
        assert_eq!(mixed.tags, vec!["All", "Alice"]);

        let doubled = expand_sentinel(record(3, "All, All", 3.0), &universe, "All");
        assert_eq!(doubled.tags, vec!["All", "All"]);

        let other_case = expand_sentinel(record(4, "all", 3.0), &universe, "All");
        assert_eq!(other_case.tags, vec!["all"]);
    }

    #[test]
    fn listed_characters_share_row_value() {
        let aggregation = aggregate(
            vec![record(1, "Alice, Bob", 10.0), record(2, "Bob", 5.0)],
            DEFAULT_SENTINEL,
        )
        .expect("aggregated");

        assert_eq!(aggregation.totals.get("Alice"), Some(&10.0));
        assert_eq!(aggregation.totals.get("Bob"), Some(&15.0));
        assert_eq!(aggregation.totals.len(), 2);
    }

    #[test]
    fn global_rows_credit_every_character() {
        let aggregation = aggregate(
            vec![record(1, "All", 100.0), record(2, "Alice", 5.0)],
            DEFAULT_SENTINEL,
        )
        .expect("aggregated");

        assert_eq!(aggregation.universe.len(), 1);
        assert_eq!(aggregation.totals.get("Alice"), Some(&105.0));
        assert_eq!(aggregation.records[0].tags, vec!["Alice"]);
    }

    #[test]
    fn sentinel_mixed_with_characters_is_unknown() {
        let error = aggregate(vec![record(1, "All, Alice", 10.0)], DEFAULT_SENTINEL)
            .expect_err("sentinel among other tags must fail");

        match error {
            ToolError::UnknownTag { row, tag } => {
                assert_eq!(row, 1);
                assert_eq!(tag, "All");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_totals() {
        let aggregation = aggregate(Vec::new(), DEFAULT_SENTINEL).expect("aggregated");
        assert!(aggregation.universe.is_empty());
        assert!(aggregation.totals.is_empty());
        assert!(aggregation.records.is_empty());
    }

    #[test]
    fn duplicate_tags_count_twice() {
        let aggregation =
            aggregate(vec![record(1, "Bob, Bob", 7.0)], DEFAULT_SENTINEL).expect("aggregated");
        assert_eq!(aggregation.totals.get("Bob"), Some(&14.0));
    }

    #[test]
    fn custom_sentinel_is_honoured() {
        let aggregation = aggregate(
            vec![
                record(1, "Party", 20.0),
                record(2, "Alice", 1.0),
                record(3, "All", 2.0),
            ],
            "Party",
        )
        .expect("aggregated");

        assert_eq!(aggregation.totals.get("Alice"), Some(&21.0));
        assert_eq!(aggregation.totals.get("All"), Some(&22.0));
        assert!(!aggregation.totals.contains_key("Party"));
    }

    #[test]
    fn accumulate_is_repeatable() {
        let records = vec![
            record(1, "All", 50.0),
            record(2, "Alice, Bob", 10.0),
            record(3, "Cara", 2.5),
        ];
        let universe = compute_universe(&records, "All");
        let expanded: Vec<Record> = records
            .into_iter()
            .map(|record| expand_sentinel(record, &universe, "All"))
            .collect();

        let first = accumulate(&expanded, &universe).expect("first pass");
        let second = accumulate(&expanded, &universe).expect("second pass");
        assert_eq!(first, second);
    }

    #[test]
    fn totals_conserve_row_values() {
        let records = vec![
            record(1, "All", 30.0),
            record(2, "Alice, Bob", 10.0),
            record(3, "Cara", 4.0),
        ];
        let aggregation = aggregate(records, "All").expect("aggregated");

        // global row once per character, listed rows once per listed tag
        let expected = 30.0 * 3.0 + 10.0 * 2.0 + 4.0;
        let sum: f64 = aggregation.totals.values().sum();
        assert_eq!(sum, expected);
        assert_eq!(aggregation.totals.get("Cara"), Some(&34.0));
    }
}
