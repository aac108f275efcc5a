// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://www.talkenglish.com/vocabulary/top-1500-nouns.aspx";
pub const USER_AGENT: &str = concat!("noun_scrape/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_FILE: &str = "nouns.txt";
pub const LINE_SEP: &str = "\n";

// Extract
pub const ROW_TAG: &str = "tr";
pub const ANCHOR_TAG: &str = "a";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
