//! Distinct-value listings that populate the filter selectors.

use std::collections::BTreeSet;

use informativos_core::{ExplodedRow, first_row_per_id};

/// Distinct values per filterable dimension, in display order.
///
/// Years and year-months are listed newest first, matching how the
/// selectors present them; text dimensions are ascending. Empty values are
/// skipped. Bulletin numbers are collected entity-level (one per id) and
/// ordered numerically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub year_months: Vec<String>,
    pub legal_branches: Vec<String>,
    pub study_areas: Vec<String>,
    pub process_classes: Vec<String>,
    pub bulletin_numbers: Vec<String>,
}

impl FilterOptions {
    pub fn from_rows(rows: &[ExplodedRow]) -> Self {
        let mut years = BTreeSet::new();
        let mut year_months = BTreeSet::new();
        let mut legal_branches = BTreeSet::new();
        let mut study_areas = BTreeSet::new();
        let mut process_classes = BTreeSet::new();

        for row in rows {
            if let Some(year) = row.year {
                years.insert(year);
            }
            if let Some(ym) = &row.year_month {
                year_months.insert(ym.clone());
            }
            if !row.legal_branch.is_empty() {
                legal_branches.insert(row.legal_branch.clone());
            }
            study_areas.insert(row.study_area.clone());
            if !row.process_class.is_empty() {
                process_classes.insert(row.process_class.clone());
            }
        }

        let mut bulletin_numbers = BTreeSet::new();
        for row in first_row_per_id(rows) {
            if let Ok(n) = row.bulletin_number.parse::<i64>() {
                bulletin_numbers.insert(n);
            }
        }

        Self {
            years: years.into_iter().rev().collect(),
            year_months: year_months.into_iter().rev().collect(),
            legal_branches: legal_branches.into_iter().collect(),
            study_areas: study_areas.into_iter().collect(),
            process_classes: process_classes.into_iter().collect(),
            bulletin_numbers: bulletin_numbers
                .into_iter()
                .map(|n| n.to_string())
                .collect(),
        }
    }
}
