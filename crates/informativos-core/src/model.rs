//! Core record types for the informativo dataset.
//!
//! A [`Julgado`] is one normalized ruling as published in an STF informativo;
//! an [`ExplodedRow`] is one (julgado, legal branch) pair. A julgado tagged
//! with N branches yields N exploded rows sharing its `id`, so consumers that
//! count entities or render detail cards must collapse back by `id`.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::areas::{DEFAULT_STUDY_AREA, study_area_for};

/// Repercussão geral flag after normalization.
///
/// Raw values other than `Sim` and `Não` (including an absent column)
/// collapse to [`NotInformed`](Self::NotInformed), so downstream code never
/// sees free text here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralRepercussion {
    Yes,
    No,
    #[default]
    NotInformed,
}

impl GeneralRepercussion {
    /// Normalize a raw cell value.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Sim" => Self::Yes,
            "Não" => Self::No,
            _ => Self::NotInformed,
        }
    }

    /// Display string, as published in the source dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Sim",
            Self::No => "Não",
            Self::NotInformed => "Não Informado",
        }
    }
}

/// One normalized ruling, pre-explosion.
///
/// Text fields are empty strings when the source cell is missing, never
/// null, so text search needs no null handling. `id` is unique per source
/// row and opaque once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Julgado {
    pub id: String,
    pub title: String,
    /// Full ruling text / "notícia completa".
    pub thesis_text: String,
    pub summary: String,
    pub legislation: String,
    pub process_class: String,
    /// Bulletin number as a string; empty when unknown or unparseable.
    pub bulletin_number: String,
    pub judgment_date: Option<NaiveDate>,
    pub general_repercussion: GeneralRepercussion,
    /// Branch tags in publication order; may be empty.
    pub legal_branches: Vec<String>,
}

impl Julgado {
    /// Explode into one row per legal branch.
    ///
    /// A julgado with no branches still yields exactly one row with an empty
    /// branch and the default study area; a record must never disappear in
    /// the explode step.
    pub fn explode(&self) -> Vec<ExplodedRow> {
        if self.legal_branches.is_empty() {
            return vec![self.row_for_branch("")];
        }
        self.legal_branches
            .iter()
            .map(|branch| self.row_for_branch(branch))
            .collect()
    }

    fn row_for_branch(&self, branch: &str) -> ExplodedRow {
        let study_area = if branch.is_empty() {
            DEFAULT_STUDY_AREA.to_string()
        } else {
            study_area_for(branch).to_string()
        };
        ExplodedRow {
            id: self.id.clone(),
            title: self.title.clone(),
            thesis_text: self.thesis_text.clone(),
            summary: self.summary.clone(),
            legislation: self.legislation.clone(),
            process_class: self.process_class.clone(),
            bulletin_number: self.bulletin_number.clone(),
            judgment_date: self.judgment_date,
            year: self.judgment_date.map(|d| d.year()),
            month: self.judgment_date.map(|d| d.month()),
            year_month: self
                .judgment_date
                .map(|d| format!("{:04}-{:02}", d.year(), d.month())),
            general_repercussion: self.general_repercussion,
            legal_branch: branch.to_string(),
            study_area,
        }
    }
}

/// One (julgado, branch) pair, the unit the filter engine operates on.
///
/// Derived date fields are materialized at construction and are consistent
/// with `judgment_date`: all `None` together or all `Some` together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplodedRow {
    pub id: String,
    pub title: String,
    pub thesis_text: String,
    pub summary: String,
    pub legislation: String,
    pub process_class: String,
    pub bulletin_number: String,
    pub judgment_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub year_month: Option<String>,
    pub general_repercussion: GeneralRepercussion,
    /// Single branch; empty when the julgado carried no branch tags.
    pub legal_branch: String,
    pub study_area: String,
}

/// Distinct ids over a row slice, in first-seen order.
pub fn unique_ids(rows: &[ExplodedRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for row in rows {
        if seen.insert(row.id.as_str()) {
            ids.push(row.id.clone());
        }
    }
    ids
}

/// First row per id over a row slice, preserving relative order: the
/// entity-level view used for counting and card rendering.
pub fn first_row_per_id(rows: &[ExplodedRow]) -> Vec<&ExplodedRow> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.id.as_str()))
        .collect()
}
