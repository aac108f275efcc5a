// src/error.rs
use std::{io, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

/// Retrieval failed; the run stops here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect, DNS, TLS, timeout, or a URL the client refused.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },
    #[error("could not read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Status code of the response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request { source, .. } | FetchError::Body { source, .. } => source.status(),
        }
    }
}

/// Persisting the noun list failed.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("could not locate the executable's directory: {0}")]
    Locate(#[source] io::Error),
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
