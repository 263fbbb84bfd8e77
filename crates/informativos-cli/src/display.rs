//! Vertical card and table rendering for julgados.
//!
//! Cards are entity-level: one card per julgado, with the branch and area
//! tags gathered from every exploded row sharing the id. Tables are
//! row-level, one line per (julgado, branch) pair.

use chrono::NaiveDate;
use informativos_core::ExplodedRow;

const MAX_TABLE_TITLE: usize = 48;

/// `dd/mm/yyyy`, or the dataset's placeholder for undated julgados.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "Data Indisponível".to_string(),
    }
}

/// Render one julgado as a vertical card.
///
/// `rows` is the table the card's entity lives in (used to gather all of
/// its branches and areas); `favorite` controls the star marker.
pub fn format_card(row: &ExplodedRow, rows: &[ExplodedRow], favorite: bool) -> String {
    let star = if favorite { "⭐" } else { "☆" };
    let mut branches: Vec<&str> = Vec::new();
    let mut areas: Vec<&str> = Vec::new();
    for r in rows.iter().filter(|r| r.id == row.id) {
        if !r.legal_branch.is_empty() && !branches.contains(&r.legal_branch.as_str()) {
            branches.push(r.legal_branch.as_str());
        }
        if !areas.contains(&r.study_area.as_str()) {
            areas.push(r.study_area.as_str());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("=== {} {} ===\n", star, row.title));
    out.push_str(&format!(
        "Informativo {} — {}\n\n",
        if row.bulletin_number.is_empty() {
            "?"
        } else {
            &row.bulletin_number
        },
        format_date(row.judgment_date)
    ));

    push_field(&mut out, "Classe", &row.process_class);
    push_field(&mut out, "Ramo(s) do Direito", &branches.join(", "));
    push_field(&mut out, "Área(s) de Estudo", &areas.join(", "));
    out.push('\n');

    if !row.thesis_text.is_empty() {
        out.push_str("Tese / Notícia Completa\n");
        out.push_str(&row.thesis_text);
        out.push_str("\n\n");
    }
    if !row.summary.is_empty() && row.summary != row.thesis_text {
        out.push_str("Resumo\n");
        out.push_str(&row.summary);
        out.push_str("\n\n");
    }

    push_field(&mut out, "Legislação", &row.legislation);
    push_field(
        &mut out,
        "Repercussão Geral",
        row.general_repercussion.as_str(),
    );
    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("  {:<22} {}\n", label, value));
    }
}

/// Render filtered rows as a fixed-width table, one line per branch row.
pub fn format_table(rows: &[ExplodedRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<16} {:<50} {:<8} {:<30} {:<28} {}\n",
        "Inf.", "Data", "Título", "Classe", "Ramo Direito", "Área Estudo", "RG"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<6} {:<16} {:<50} {:<8} {:<30} {:<28} {}\n",
            row.bulletin_number,
            format_date(row.judgment_date),
            truncate(&row.title, MAX_TABLE_TITLE),
            row.process_class,
            row.legal_branch,
            row.study_area,
            row.general_repercussion.as_str()
        ));
    }
    out
}

/// Render a counts listing as an aligned section.
pub fn format_counts(header: &str, counts: &[(String, usize)]) -> String {
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    if counts.is_empty() {
        out.push_str("  (sem dados)\n");
        return out;
    }
    for (label, count) in counts {
        out.push_str(&format!("  {:<34} {}\n", label, count));
    }
    out
}

/// Char-aware truncation with an ellipsis marker.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use informativos_core::{GeneralRepercussion, Julgado};

    fn exploded() -> Vec<ExplodedRow> {
        Julgado {
            id: "0".to_string(),
            title: "Aposentadoria especial".to_string(),
            thesis_text: "Revisão de aposentadoria especial.".to_string(),
            summary: "Resumo distinto.".to_string(),
            legislation: "CF/88, art. 201".to_string(),
            process_class: "RE".to_string(),
            bulletin_number: "1040".to_string(),
            judgment_date: NaiveDate::from_ymd_opt(2022, 3, 9),
            general_repercussion: GeneralRepercussion::Yes,
            legal_branches: vec![
                "Direito Previdenciário".to_string(),
                "Direito Constitucional".to_string(),
            ],
        }
        .explode()
    }

    #[test]
    fn card_gathers_every_branch_and_area_for_the_id() {
        let rows = exploded();
        let card = format_card(&rows[0], &rows, false);
        assert!(card.contains("Direito Previdenciário, Direito Constitucional"));
        assert!(card.contains("Direito Social / Previdenciário, Direito Público"));
        assert!(card.contains("Informativo 1040 — 09/03/2022"));
        assert!(card.contains("Sim"));
    }

    #[test]
    fn card_shows_summary_only_when_distinct_from_thesis() {
        let mut rows = exploded();
        assert!(format_card(&rows[0], &rows.clone(), false).contains("Resumo\n"));

        for row in &mut rows {
            row.summary = row.thesis_text.clone();
        }
        assert!(!format_card(&rows[0], &rows.clone(), false).contains("Resumo\n"));
    }

    #[test]
    fn card_marks_favorites() {
        let rows = exploded();
        assert!(format_card(&rows[0], &rows, true).starts_with("=== ⭐"));
        assert!(format_card(&rows[0], &rows, false).starts_with("=== ☆"));
    }

    #[test]
    fn missing_date_uses_the_placeholder() {
        assert_eq!(format_date(None), "Data Indisponível");
    }

    #[test]
    fn table_has_one_line_per_branch_row() {
        let rows = exploded();
        let table = format_table(&rows);
        // Header plus two branch rows.
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn truncation_is_char_aware() {
        let long = "á".repeat(80);
        let cell = truncate(&long, 10);
        assert_eq!(cell.chars().count(), 10);
        assert!(cell.ends_with("..."));
    }
}
