//! Branch splitting and the fixed branch → study-area lookup.
//!
//! The source dataset tags each julgado with zero or more "Ramo Direito"
//! values in a single semicolon-delimited cell. Study areas are a coarser
//! grouping used by the study-planning UI; the mapping is a fixed editorial
//! table, not inferred from the data.

/// Study area assigned to branches the lookup does not know.
pub const DEFAULT_STUDY_AREA: &str = "Outras Áreas";

/// Editorial branch → study-area table.
const BRANCH_AREAS: &[(&str, &str)] = &[
    ("Direito Constitucional", "Direito Público"),
    ("Direito Administrativo", "Direito Público"),
    ("Direito Tributário", "Direito Público"),
    ("Direito Financeiro", "Direito Público"),
    ("Direito Eleitoral", "Direito Público"),
    ("Direito Ambiental", "Direito Público"),
    ("Direito Urbanístico", "Direito Público"),
    ("Direito Penal", "Direito Penal"),
    ("Direito Processual Penal", "Direito Penal"),
    ("Direito Civil", "Direito Privado"),
    ("Direito Empresarial", "Direito Privado"),
    ("Direito Comercial", "Direito Privado"),
    ("Direito do Consumidor", "Direito Privado"),
    ("Direito Processual Civil", "Direito Processual"),
    ("Direito do Trabalho", "Direito Social / Trabalho"),
    ("Direito Processual do Trabalho", "Direito Social / Trabalho"),
    ("Direito Previdenciário", "Direito Social / Previdenciário"),
    ("Direito Internacional Público", "Direito Internacional"),
    ("Direito Internacional Privado", "Direito Internacional"),
];

/// Look up the study area for a branch name.
///
/// Unknown branches fall back to [`DEFAULT_STUDY_AREA`]. Matching is exact
/// on the trimmed branch name.
pub fn study_area_for(branch: &str) -> &'static str {
    let branch = branch.trim();
    BRANCH_AREAS
        .iter()
        .find(|(name, _)| *name == branch)
        .map(|(_, area)| *area)
        .unwrap_or(DEFAULT_STUDY_AREA)
}

/// Split a raw semicolon-delimited branch cell into branch names.
///
/// Tokens are trimmed and empty tokens dropped, so `"A; ;B;"` yields
/// `["A", "B"]`. Order is preserved.
pub fn split_branches(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
