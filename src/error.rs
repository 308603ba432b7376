use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a comparison run.
///
/// Nothing here is retried: the first failure ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The recursive scan of `--dir` hit a filesystem error.
    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input file is not a valid domain for one of the schemas.
    #[error("failed to decode {} as {schema} domain: {source}", path.display())]
    Decode {
        schema: &'static str,
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// The process is not running on [`crate::alloc::CountingAlloc`].
    #[error("allocation counters are not active; register alloc::CountingAlloc as #[global_allocator]")]
    CountingAllocatorMissing,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
