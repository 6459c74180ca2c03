//! Start-up and server errors
//!
//! Request-level failures are [`AppError`](crate::AppError); this type
//! covers what can go wrong before and around serving.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::db::RepoError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid seed data: {0}")]
    SeedData(#[from] RepoError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Server-level Result type
pub type Result<T> = std::result::Result<T, ServerError>;
