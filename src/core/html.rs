// src/core/html.rs

// Queryable DOM over raw page text. Parsing is html5ever's error-recovering
// tree builder, so there is no failure path: broken markup just yields a
// smaller tree.

use scraper::{ElementRef, Html, Selector};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self { html: Html::parse_document(raw) }
    }

    /// Every element named `tag`, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<ElementRef<'_>> {
        match tag_selector(tag) {
            Some(sel) => self.html.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    /// Parser recovery notes (unclosed tags, stray end tags, ...).
    pub fn recovery_notes(&self) -> usize {
        self.html.errors.len()
    }
}

/// First descendant of `scope` named `tag`.
pub fn find_first<'a>(scope: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    let sel = tag_selector(tag)?;
    scope.select(&sel).next()
}

/// Concatenated text of all descendant text nodes, as rendered (no tags).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

// Only bare tag names; anything that would read as a compound selector matches nothing.
fn tag_selector(tag: &str) -> Option<Selector> {
    let valid = !tag.is_empty()
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return None;
    }
    Selector::parse(tag).ok()
}
