//! CSV loading and normalization into the exploded in-memory table.
//!
//! The loader resolves the published column names against a fixed canonical
//! schema once, normalizes each record with per-field degradation policies
//! (bad cells become empty/`None`/default, never errors), and explodes the
//! semicolon-delimited branch column into one row per branch. Only an
//! unreadable input (missing file, I/O failure, malformed CSV structure)
//! fails the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use informativos_core::{
    ExplodedRow, GeneralRepercussion, Julgado, first_row_per_id, parse_bulletin_number,
    parse_judgment_date, split_branches, unique_ids,
};
use tracing::info;

use crate::DataLoadError;

// Raw header names as published in the source spreadsheet.
const COL_ID: &str = "id";
const COL_BULLETIN: &str = "Numero do informativo";
const COL_PROCESS_CLASS: &str = "Classe Processo";
const COL_JUDGMENT_DATE: &str = "Data Julgamento";
const COL_THESIS: &str = "Tese Julgado";
const COL_BRANCHES: &str = "Ramo Direito";
const COL_REPERCUSSION: &str = "Repercussão Geral";
const COL_TITLE: &str = "Título";
const COL_SUMMARY: &str = "Resumo";
const COL_LEGISLATION: &str = "Legislação";

/// Column indexes resolved once from the header row.
///
/// A column missing from the input resolves to `None` and reads as an empty
/// cell everywhere, so the rest of the pipeline never checks for presence.
struct ColumnMap {
    id: Option<usize>,
    bulletin: Option<usize>,
    process_class: Option<usize>,
    judgment_date: Option<usize>,
    thesis: Option<usize>,
    branches: Option<usize>,
    repercussion: Option<usize>,
    title: Option<usize>,
    summary: Option<usize>,
    legislation: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Self {
        let index_of = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            id: index_of(COL_ID),
            bulletin: index_of(COL_BULLETIN),
            process_class: index_of(COL_PROCESS_CLASS),
            judgment_date: index_of(COL_JUDGMENT_DATE),
            thesis: index_of(COL_THESIS),
            branches: index_of(COL_BRANCHES),
            repercussion: index_of(COL_REPERCUSSION),
            title: index_of(COL_TITLE),
            summary: index_of(COL_SUMMARY),
            legislation: index_of(COL_LEGISLATION),
        }
    }
}

/// Read a cell through a resolved column index; absent column or short row
/// reads as empty.
fn cell<'a>(record: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

/// The normalized, exploded informativo table.
///
/// Built once per dataset and read-only thereafter; every filter operation
/// downstream produces a fresh view over [`rows`](Self::rows).
pub struct Dataset {
    rows: Vec<ExplodedRow>,
}

impl Dataset {
    /// Load and normalize a CSV dataset from disk.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        if !path.exists() {
            return Err(DataLoadError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            unique = dataset.unique_count(),
            rows = dataset.row_count(),
            "loaded informativo dataset"
        );
        Ok(dataset)
    }

    /// Normalize a CSV dataset from any reader.
    ///
    /// Rows are exploded in input order; a record with no branch tokens
    /// still contributes exactly one row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::resolve(&csv_reader.headers()?.clone());

        let mut rows = Vec::new();
        for (position, record) in csv_reader.records().enumerate() {
            let record = record?;
            let julgado = normalize_record(&record, &columns, position);
            rows.extend(julgado.explode());
        }

        Ok(Self { rows })
    }

    /// All exploded rows, in insertion order.
    pub fn rows(&self) -> &[ExplodedRow] {
        &self.rows
    }

    /// Row-level count (one per branch).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Entity-level count (distinct ids).
    pub fn unique_count(&self) -> usize {
        unique_ids(&self.rows).len()
    }

    /// First row per id, preserving insertion order: the view used for
    /// entity-level rendering.
    pub fn unique_rows(&self) -> Vec<&ExplodedRow> {
        first_row_per_id(&self.rows)
    }
}

/// Normalize one raw record into a [`Julgado`], applying per-field
/// degradation policies. `position` supplies the id when the input has no
/// id column.
fn normalize_record(record: &StringRecord, columns: &ColumnMap, position: usize) -> Julgado {
    let raw_id = cell(record, columns.id).trim();
    let id = if raw_id.is_empty() {
        position.to_string()
    } else {
        raw_id.to_string()
    };

    let bulletin_number = parse_bulletin_number(cell(record, columns.bulletin))
        .map(|n| n.to_string())
        .unwrap_or_default();

    Julgado {
        id,
        title: cell(record, columns.title).trim().to_string(),
        thesis_text: cell(record, columns.thesis).trim().to_string(),
        summary: cell(record, columns.summary).trim().to_string(),
        legislation: cell(record, columns.legislation).trim().to_string(),
        process_class: cell(record, columns.process_class).trim().to_string(),
        bulletin_number,
        judgment_date: parse_judgment_date(cell(record, columns.judgment_date)),
        general_repercussion: GeneralRepercussion::parse(cell(record, columns.repercussion)),
        legal_branches: split_branches(cell(record, columns.branches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_HEADER: &str = "Numero do informativo,Classe Processo,Data Julgamento,Tese Julgado,Ramo Direito,Repercussão Geral,Título,Resumo,Legislação";

    fn dataset(csv: &str) -> Dataset {
        Dataset::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn explode_counts_match_branch_lists() {
        // Case A: two branches; Case B: one; Case C: none.
        let csv = format!(
            "{FULL_HEADER}\n\
             1040,ADI,2022-03-09,Tese A,Direito Penal; Direito Civil,Sim,Caso A,,\n\
             1041,RE,2022-05-11,Tese B,Direito Administrativo,Não,Caso B,,\n\
             1042,HC,2023-02-01,Tese C,,,Caso C,,\n"
        );
        let ds = dataset(&csv);
        assert_eq!(ds.row_count(), 4);
        assert_eq!(ds.unique_count(), 3);

        let case_c: Vec<_> = ds.rows().iter().filter(|r| r.id == "2").collect();
        assert_eq!(case_c.len(), 1);
        assert_eq!(case_c[0].legal_branch, "");
        assert_eq!(case_c[0].study_area, "Outras Áreas");
    }

    #[test]
    fn ids_assigned_by_row_position_without_id_column() {
        let csv = format!(
            "{FULL_HEADER}\n\
             1040,ADI,2022-03-09,Tese A,Direito Penal,Sim,Caso A,,\n\
             1041,RE,2022-05-11,Tese B,Direito Civil,Não,Caso B,,\n"
        );
        let ds = dataset(&csv);
        let ids = unique_ids(ds.rows());
        assert_eq!(ids, vec!["0", "1"]);
    }

    #[test]
    fn id_column_wins_when_present() {
        let csv = "id,Título,Ramo Direito\nj-17,Caso,Direito Penal\n";
        let ds = dataset(csv);
        assert_eq!(ds.rows()[0].id, "j-17");
    }

    #[test]
    fn missing_optional_columns_degrade_to_defaults() {
        let csv = "Título\nSó título\n";
        let ds = dataset(csv);
        assert_eq!(ds.row_count(), 1);
        let row = &ds.rows()[0];
        assert_eq!(row.title, "Só título");
        assert_eq!(row.thesis_text, "");
        assert_eq!(row.summary, "");
        assert_eq!(row.process_class, "");
        assert_eq!(row.bulletin_number, "");
        assert_eq!(row.judgment_date, None);
        assert_eq!(row.general_repercussion, GeneralRepercussion::NotInformed);
        assert_eq!(row.legal_branch, "");
        assert_eq!(row.study_area, "Outras Áreas");
    }

    #[test]
    fn bad_cells_never_fail_the_load() {
        let csv = format!(
            "{FULL_HEADER}\n\
             não-é-número,ADI,quando?,Tese,Direito Penal,Talvez,Caso,,\n"
        );
        let ds = dataset(&csv);
        let row = &ds.rows()[0];
        assert_eq!(row.bulletin_number, "");
        assert_eq!(row.judgment_date, None);
        assert_eq!(row.year, None);
        assert_eq!(row.general_repercussion, GeneralRepercussion::NotInformed);
    }

    #[test]
    fn bulletin_float_artifact_normalizes() {
        let csv = "Numero do informativo,Título\n1043.0,Caso\n";
        let ds = dataset(csv);
        assert_eq!(ds.rows()[0].bulletin_number, "1043");
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let csv = format!("{FULL_HEADER}\n1040,ADI\n");
        let ds = dataset(&csv);
        assert_eq!(ds.rows()[0].bulletin_number, "1040");
        assert_eq!(ds.rows()[0].judgment_date, None);
    }

    #[test]
    fn insertion_order_preserved_through_explode() {
        let csv = "Título,Ramo Direito\nA,Penal X; Civil Y\nB,Z\n";
        let ds = dataset(csv);
        let branches: Vec<_> = ds.rows().iter().map(|r| r.legal_branch.as_str()).collect();
        assert_eq!(branches, vec!["Penal X", "Civil Y", "Z"]);
    }

    #[test]
    fn unique_rows_keep_first_per_id() {
        let csv = "Título,Ramo Direito\nA,Direito Penal;Direito Civil\nB,Direito Civil\n";
        let ds = dataset(csv);
        let unique = ds.unique_rows();
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].id, "0");
        assert_eq!(unique[0].legal_branch, "Direito Penal");
        assert_eq!(unique[1].id, "1");
    }

    #[test]
    fn headers_only_is_an_empty_dataset() {
        let ds = dataset(&format!("{FULL_HEADER}\n"));
        assert_eq!(ds.row_count(), 0);
        assert_eq!(ds.unique_count(), 0);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = Dataset::load(&tmp.path().join("nonexistent.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound(_))));
    }

    #[test]
    fn load_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("julgados.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "{FULL_HEADER}\n1040,ADI,2022-03-09,Tese,Direito Penal,Sim,Caso,,\n"
        )
        .unwrap();

        let ds = Dataset::load(&path).unwrap();
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.rows()[0].year, Some(2022));
    }
}
