// src/runner.rs

use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    config::options::ScrapeOptions,
    core::{html::Document, net},
    error::Result,
    file, scrape,
};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub count: usize,
    pub path: PathBuf,
}

/// Fetch → parse → extract → write. The first failing step ends the run;
/// nothing is written unless every earlier step succeeded.
pub fn run(opts: &ScrapeOptions) -> Result<RunSummary> {
    let html = net::get_raw_html(&opts.url)?;

    let nouns = {
        let doc = Document::parse(&html);
        debug!(recovered = doc.recovery_notes(), "parsed document");
        scrape::extract_nouns(&doc)
    };
    info!(count = nouns.len(), "collected nouns");

    let path = file::write_noun_list(&nouns, opts.out_path())?;
    Ok(RunSummary { count: nouns.len(), path })
}
