// src/bin/cli.rs
use color_eyre::eyre::WrapErr;
use noun_scrape::{config::ScrapeOptions, log, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let summary = runner::run(&ScrapeOptions::default()).wrap_err("noun scrape failed")?;
    println!(
        "SUCCESS! {} nouns written to {}.",
        summary.count,
        summary.path.display()
    );
    Ok(())
}
