//! Solution counts per difficulty

use crate::scanner::Buckets;
use std::collections::BTreeMap;

/// Counts derived from the scanned buckets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total: usize,
    pub by_difficulty: BTreeMap<u32, usize>,
    /// Solution files per source extension
    pub by_language: BTreeMap<String, usize>,
}

impl StatsSnapshot {
    /// Count for `label`, zero when the label has no bucket
    pub fn count(&self, label: u32) -> usize {
        self.by_difficulty.get(&label).copied().unwrap_or(0)
    }
}

/// Reduce buckets to per-label counts and a total
pub fn aggregate(buckets: &Buckets) -> StatsSnapshot {
    let by_difficulty: BTreeMap<u32, usize> = buckets
        .iter()
        .map(|(&label, bucket)| (label, bucket.len()))
        .collect();

    let mut by_language: BTreeMap<String, usize> = BTreeMap::new();
    for solution in buckets.values().flat_map(|b| &b.solutions) {
        *by_language.entry(solution.extension.clone()).or_default() += 1;
    }

    StatsSnapshot {
        total: by_difficulty.values().sum(),
        by_difficulty,
        by_language,
    }
}
