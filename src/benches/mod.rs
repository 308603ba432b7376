//! Measurement strategies and the per-file comparison loop.

pub mod benchmark;
pub mod compare;

use std::path::Path;

use crate::domain::DomainSchema;
use crate::error::{Error, Result};

/// Decode once, attributing any failure to `path` and the schema.
fn decode<S: DomainSchema>(path: &Path, xml: &[u8]) -> Result<S> {
    S::decode(xml).map_err(|source| Error::Decode {
        schema: S::NAME,
        path: path.to_path_buf(),
        source,
    })
}
