use std::collections::{BTreeMap, BTreeSet};

/// Name of a character (or any other grouping tag).
pub type Tag = String;

/// Every distinct non-sentinel tag observed across the input.
pub type TagUniverse = BTreeSet<Tag>;

/// Tag → summed experience. The key set always equals the universe the
/// totals were seeded from.
pub type Totals = BTreeMap<Tag, f64>;

/// One row of the experience log.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based position of the row among the data rows of the input.
    pub row: usize,
    /// Characters credited by this row, in input order.
    pub tags: Vec<Tag>,
    /// Experience awarded by this row.
    pub value: f64,
    /// Remaining columns, carried along for display only. Never holds the
    /// tags or value column names.
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Creates a record without passthrough columns.
    pub fn new(row: usize, tags: Vec<Tag>, value: f64) -> Self {
        Self {
            row,
            tags,
            value,
            extra: BTreeMap::new(),
        }
    }

    /// Returns `true` when the tag list is exactly `[sentinel]`.
    pub fn is_sentinel(&self, sentinel: &str) -> bool {
        matches!(self.tags.as_slice(), [only] if only == sentinel)
    }
}

/// Result of a full aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Records after sentinel expansion.
    pub records: Vec<Record>,
    pub universe: TagUniverse,
    pub totals: Totals,
}
