use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::alloc;
use crate::domain::static_sizes;
use crate::error::{Error, Result};
use crate::harness::BenchConfig;
use crate::input::collect_inputs;
use crate::report;
use crate::schema::{ComparisonReport, FileReport, FileResult, RunMeta};

#[derive(Clone, Debug, Default)]
pub struct CompareArgs {
    /// A single domain file.
    pub xml: Option<PathBuf>,
    /// A directory scanned recursively for `*.xml`.
    pub dir: Option<PathBuf>,
}

fn hex(digest: &[u8]) -> String {
    let mut s = String::with_capacity(digest.len() * 2);
    for b in digest {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

/// Measure every collected file and print the comparison table to `out`.
///
/// The size report and table header are written before any file is measured, rows
/// only once every file has been measured. Any error aborts the run.
pub fn run(cfg: &BenchConfig, args: &CompareArgs, out: &mut impl Write) -> Result<ComparisonReport> {
    if !alloc::is_active() {
        return Err(Error::CountingAllocatorMissing);
    }

    let mut files = collect_inputs(args.xml.as_deref(), args.dir.as_deref())?;
    let before_dedup = files.len();
    let mut seen = HashSet::new();
    files.retain(|f| seen.insert(f.clone()));
    if files.len() != before_dedup {
        tracing::warn!(duplicates = before_dedup - files.len(), "skipping repeated input paths");
    }
    tracing::info!(files = files.len(), profile = cfg.profile.as_str(), "collected inputs");

    let sizes = static_sizes();
    report::write_static_sizes(out, &sizes)?;
    report::write_header(out, false)?;

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        reports.push(measure_file(cfg, path)?);
    }

    report::sort_by_benchmark_ratio(&mut reports, |r| &r.result);

    for r in &reports {
        report::write_row(out, Path::new(&r.path), &r.result)?;
    }
    report::write_header(out, true)?;

    let summary = report::summarize(reports.iter().map(|r| &r.result));
    report::write_summary(out, summary.as_ref())?;
    out.flush()?;

    Ok(ComparisonReport {
        run: RunMeta::current(cfg.profile.as_str()),
        static_sizes: sizes,
        files: reports,
        summary,
    })
}

fn measure_file(cfg: &BenchConfig, path: &Path) -> Result<FileReport> {
    let xml = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(file = %path.display(), bytes = xml.len(), "measuring");

    let bench = super::benchmark::run(cfg, path, &xml)?;
    let runtime = super::runtime::run(path, &xml)?;

    let result = FileResult {
        benchmark: bench.stats(),
        runtime,
    };
    tracing::debug!(file = %path.display(), ?result, "measured");

    Ok(FileReport {
        path: path.to_string_lossy().into_owned(),
        input_bytes: xml.len() as u64,
        input_sha256: hex(&Sha256::digest(&xml)),
        benchmark_ratio: report::bytes_ratio(&result.benchmark),
        runtime_ratio: report::bytes_ratio(&result.runtime),
        result,
        primary_timing: bench.primary.timing(),
        secondary_timing: bench.secondary.timing(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Profile;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(hex(&[0x00, 0x0f, 0xab]), "000fab");
    }

    // Unit tests run on the system allocator; see tests/ for full runs.
    #[test]
    fn refuses_to_run_without_counting_allocator() {
        let cfg = BenchConfig {
            profile: Profile::Quick,
        };
        let mut out = Vec::new();
        let err = run(&cfg, &CompareArgs::default(), &mut out).unwrap_err();
        assert!(matches!(err, Error::CountingAllocatorMissing));
        assert!(out.is_empty());
    }
}
