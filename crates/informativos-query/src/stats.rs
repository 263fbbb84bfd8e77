//! Aggregate counts backing the statistics charts.
//!
//! Branch and study-area counts are row-level (a julgado tagged with two
//! branches counts once per branch). Year and repercussion counts are
//! entity-level, deduplicated by id, since those are per-julgado
//! attributes. All listings are sorted by descending count, ties by label,
//! so chart ordering is deterministic.

use std::collections::HashMap;

use informativos_core::{ExplodedRow, first_row_per_id};

/// Row-level counts per legal branch. Rows with no branch are skipped.
pub fn counts_by_branch(rows: &[ExplodedRow]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        if !row.legal_branch.is_empty() {
            *counts.entry(row.legal_branch.as_str()).or_default() += 1;
        }
    }
    sorted(counts)
}

/// Row-level counts per study area.
pub fn counts_by_area(rows: &[ExplodedRow]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row.study_area.as_str()).or_default() += 1;
    }
    sorted(counts)
}

/// Entity-level counts per judgment year. Undated julgados are skipped.
pub fn counts_by_year(rows: &[ExplodedRow]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in first_row_per_id(rows) {
        if let Some(year) = row.year {
            *counts.entry(year.to_string()).or_default() += 1;
        }
    }
    sorted_owned(counts)
}

/// Entity-level counts per repercussão geral value.
pub fn counts_by_repercussion(rows: &[ExplodedRow]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in first_row_per_id(rows) {
        *counts.entry(row.general_repercussion.as_str()).or_default() += 1;
    }
    sorted(counts)
}

fn sorted(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    sorted_owned(
        counts
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect(),
    )
}

fn sorted_owned(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
