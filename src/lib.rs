// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod nouns;
pub mod runner;
pub mod scrape;

pub use error::{Error, FetchError, WriteError};
pub use nouns::NounSet;
