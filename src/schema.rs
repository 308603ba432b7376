use serde::{Deserialize, Serialize};

/// Allocation cost of decoding one document into one schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStat {
    pub bytes: u64,
    pub allocs: u64,
}

/// One measurement of both schemas over the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonStats {
    /// libvirt binding.
    pub primary: MemoryStat,
    /// KubeVirt schema.
    pub secondary: MemoryStat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub benchmark: ComparisonStats,
    pub runtime: ComparisonStats,
}

/// Harness timing for one schema, benchmark strategy only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timing {
    pub iters: u64,
    pub warmup_iters: u64,
    pub total_ns: u128,
    pub ns_per_iter: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub profile: String,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

impl RunMeta {
    /// Metadata for a run starting now. The commit comes from `GIT_SHA`, falling
    /// back to `GITHUB_SHA`, shortened to 12 characters.
    pub fn current(profile: &str) -> Self {
        let git_sha = ["GIT_SHA", "GITHUB_SHA"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
            .map(|sha| sha.chars().take(12).collect());

        Self {
            schema_version: 1,
            bench_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: profile.to_string(),
            timestamp_utc: chrono::Utc::now().to_rfc3339(),
            git_sha,
        }
    }
}

/// `size_of` of each top-level schema struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSizes {
    pub primary: usize,
    pub secondary: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub input_bytes: u64,
    pub input_sha256: String,
    pub result: FileResult,
    pub benchmark_ratio: Option<u64>,
    pub runtime_ratio: Option<u64>,
    pub primary_timing: Timing,
    pub secondary_timing: Timing,
}

/// Averages over the benchmark strategy. Absent when nothing was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub files: usize,
    pub avg_primary_bytes: u64,
    pub avg_secondary_bytes: u64,
    pub avg_ratio: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub run: RunMeta,
    pub static_sizes: StaticSizes,
    /// Sorted by ascending benchmark ratio.
    pub files: Vec<FileReport>,
    pub summary: Option<Summary>,
}
