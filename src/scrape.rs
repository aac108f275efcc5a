// src/scrape.rs

// Noun extraction from the vocabulary page.
//
// The page lists one noun per table row, as the first link in that row.
// Rows with no link (headers, spacers) are skipped.

use tracing::debug;

use crate::{
    config::consts::{ANCHOR_TAG, ROW_TAG},
    core::html::{self, Document},
    nouns::NounSet,
};

/// Walk every `<tr>` and keep the text of its first `<a>`.
pub fn extract_nouns(doc: &Document) -> NounSet {
    let rows = doc.find_all(ROW_TAG);
    let mut nouns = NounSet::new();
    let mut linked = 0usize;

    for row in &rows {
        let Some(anchor) = html::find_first(*row, ANCHOR_TAG) else {
            continue;
        };
        linked += 1;
        nouns.insert(html::text_of(anchor));
    }

    debug!(rows = rows.len(), linked, unique = nouns.len(), "extracted nouns");
    nouns
}

/// Parse + extract in one go.
pub fn nouns_from_html(raw: &str) -> NounSet {
    extract_nouns(&Document::parse(raw))
}
