//! The filter engine: an AND of independent predicates over the exploded
//! table.
//!
//! Every predicate category left empty/unset passes all rows, so the
//! default [`FilterSpec`] is the identity. Each application walks the
//! immutable table and produces a fresh owned view; relative row order is
//! always preserved.

use std::collections::{BTreeSet, HashSet};

use informativos_core::{ExplodedRow, GeneralRepercussion, unique_ids};
use serde::{Deserialize, Serialize};

use crate::search::SearchPattern;

/// Which of the two date predicates is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateMode {
    #[default]
    ByYear,
    ByYearMonth,
}

/// One user-selected filter configuration.
///
/// Set-valued fields are selections: empty means "no filtering on this
/// dimension". The inactive date dimension is ignored entirely;
/// `year_months` has no effect under [`DateMode::ByYear`] and vice versa.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub date_mode: DateMode,
    pub years: BTreeSet<i32>,
    /// `YYYY-MM` keys.
    pub year_months: BTreeSet<String>,
    pub study_areas: BTreeSet<String>,
    pub legal_branches: BTreeSet<String>,
    pub process_classes: BTreeSet<String>,
    pub bulletin_number: Option<String>,
    pub general_repercussion: Option<GeneralRepercussion>,
    /// When set, only rows whose id is in `favorites` pass.
    pub favorites_only: bool,
    /// Caller-supplied favorite ids, consulted only under `favorites_only`.
    pub favorites: HashSet<String>,
    pub search_text: Option<String>,
}

impl FilterSpec {
    fn matches(&self, row: &ExplodedRow, search: Option<&SearchPattern>) -> bool {
        let date_ok = match self.date_mode {
            DateMode::ByYear => {
                self.years.is_empty() || row.year.is_some_and(|y| self.years.contains(&y))
            }
            DateMode::ByYearMonth => {
                self.year_months.is_empty()
                    || row
                        .year_month
                        .as_deref()
                        .is_some_and(|ym| self.year_months.contains(ym))
            }
        };
        if !date_ok {
            return false;
        }

        if !self.study_areas.is_empty() && !self.study_areas.contains(&row.study_area) {
            return false;
        }
        if !self.legal_branches.is_empty() && !self.legal_branches.contains(&row.legal_branch) {
            return false;
        }
        if !self.process_classes.is_empty() && !self.process_classes.contains(&row.process_class) {
            return false;
        }
        if let Some(bulletin) = &self.bulletin_number
            && *bulletin != row.bulletin_number
        {
            return false;
        }
        if let Some(rg) = self.general_repercussion
            && rg != row.general_repercussion
        {
            return false;
        }
        if self.favorites_only && !self.favorites.contains(&row.id) {
            return false;
        }
        if let Some(pattern) = search
            && !pattern.matches_row(row)
        {
            return false;
        }

        true
    }
}

/// Row- and entity-level counts of a filtered view.
///
/// Both are exposed because they differ whenever any julgado carries more
/// than one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub row_count: usize,
    pub unique_count: usize,
}

/// Apply a filter spec, producing a fresh view in the original order.
pub fn apply_filters(rows: &[ExplodedRow], spec: &FilterSpec) -> Vec<ExplodedRow> {
    let search = spec
        .search_text
        .as_deref()
        .filter(|query| !query.is_empty())
        .map(SearchPattern::compile);

    rows.iter()
        .filter(|row| spec.matches(row, search.as_ref()))
        .cloned()
        .collect()
}

/// Row and distinct-id counts for a view.
pub fn summarize(rows: &[ExplodedRow]) -> FilterSummary {
    FilterSummary {
        row_count: rows.len(),
        unique_count: unique_ids(rows).len(),
    }
}
