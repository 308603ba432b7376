//! Calibrated, repeated decoding of one document.

use std::path::Path;

use crate::domain::{DomainSchema, Primary, Secondary};
use crate::error::Result;
use crate::harness::{measure_calibrated, BenchConfig, Measured};
use crate::schema::ComparisonStats;

#[derive(Clone, Debug)]
pub struct BenchmarkOutcome {
    pub primary: Measured,
    pub secondary: Measured,
}

impl BenchmarkOutcome {
    pub fn stats(&self) -> ComparisonStats {
        ComparisonStats {
            primary: self.primary.per_iter,
            secondary: self.secondary.per_iter,
        }
    }
}

pub fn run(cfg: &BenchConfig, path: &Path, xml: &[u8]) -> Result<BenchmarkOutcome> {
    Ok(BenchmarkOutcome {
        primary: measure::<Primary>(cfg, path, xml)?,
        secondary: measure::<Secondary>(cfg, path, xml)?,
    })
}

fn measure<S: DomainSchema>(cfg: &BenchConfig, path: &Path, xml: &[u8]) -> Result<Measured> {
    // Decoding is deterministic, so one successful decode covers every timed one.
    super::decode::<S>(path, xml)?;

    let m = measure_calibrated(cfg, || S::decode(xml));
    tracing::debug!(
        schema = S::NAME,
        iters = m.iters,
        ns_per_iter = m.ns_per_iter,
        bytes = m.per_iter.bytes,
        allocs = m.per_iter.allocs,
        "benchmark"
    );
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::error::Error;
    use crate::harness::Profile;

    fn quick() -> BenchConfig {
        BenchConfig {
            profile: Profile::Quick,
        }
    }

    #[test]
    fn measures_both_schemas() {
        let out = run(&quick(), Path::new("fedora-q35.xml"), fixtures::FEDORA_Q35.as_bytes()).unwrap();
        assert!(out.primary.iters >= 1);
        assert!(out.secondary.iters >= 1);
        assert!(out.primary.total_ns > 0);
    }

    #[test]
    fn malformed_input_fails_before_timing() {
        let err = run(&quick(), Path::new("bad.xml"), b"<domain><name>x</domain>").unwrap_err();
        match err {
            Error::Decode { schema, path, .. } => {
                assert_eq!(schema, Primary::NAME);
                assert_eq!(path, Path::new("bad.xml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
