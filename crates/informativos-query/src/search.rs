//! Free-text search over title, thesis, and summary.

use informativos_core::ExplodedRow;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// A compiled search query.
///
/// The query is compiled as a case-insensitive regex. When compilation
/// fails (unbalanced parens, a stray `*`, anything a user can mistype) the
/// pattern falls back to a literal, case-insensitive substring match
/// instead of surfacing an error, so malformed input narrows results but
/// never crashes the filter.
pub struct SearchPattern {
    matcher: Matcher,
}

enum Matcher {
    Regex(Regex),
    /// Lowercased literal query for substring matching.
    Literal(String),
}

impl SearchPattern {
    /// Compile a query, falling back to literal matching on invalid syntax.
    pub fn compile(query: &str) -> Self {
        let matcher = match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(regex) => Matcher::Regex(regex),
            Err(err) => {
                debug!(%err, "invalid search pattern, falling back to literal match");
                Matcher::Literal(query.to_lowercase())
            }
        };
        Self { matcher }
    }

    /// Whether compilation fell back to literal substring matching.
    pub fn is_literal_fallback(&self) -> bool {
        matches!(self.matcher, Matcher::Literal(_))
    }

    /// Match against a single text field.
    pub fn matches(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(regex) => regex.is_match(text),
            Matcher::Literal(needle) => text.to_lowercase().contains(needle),
        }
    }

    /// Match against a row: title OR thesis OR summary.
    pub fn matches_row(&self, row: &ExplodedRow) -> bool {
        self.matches(&row.title) || self.matches(&row.thesis_text) || self.matches(&row.summary)
    }
}
