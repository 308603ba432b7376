use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::alloc::AllocSnapshot;
use crate::schema::{MemoryStat, Timing};

#[derive(Clone, Copy, Debug)]
pub enum Profile {
    Quick,
    Full,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Quick => "quick",
            Profile::Full => "full",
        }
    }
}

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub profile: Profile,
}

impl BenchConfig {
    pub fn warmup_iters(&self) -> u64 {
        match self.profile {
            Profile::Quick => 3,
            Profile::Full => 32,
        }
    }

    /// How long the final calibrated run should take.
    pub fn target_time(&self) -> Duration {
        match self.profile {
            Profile::Quick => Duration::from_millis(100),
            Profile::Full => Duration::from_secs(1),
        }
    }

    pub fn max_iters(&self) -> u64 {
        match self.profile {
            Profile::Quick => 100_000,
            Profile::Full => 1_000_000_000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Measured {
    pub iters: u64,
    pub warmup_iters: u64,
    pub total_ns: u128,
    pub ns_per_iter: f64,
    /// Allocations of the timed loop divided by `iters`.
    pub per_iter: MemoryStat,
}

impl Measured {
    pub fn timing(&self) -> Timing {
        Timing {
            iters: self.iters,
            warmup_iters: self.warmup_iters,
            total_ns: self.total_ns,
            ns_per_iter: self.ns_per_iter,
        }
    }
}

pub fn measure_fn<T>(iters: u64, warmup_iters: u64, mut f: impl FnMut() -> T) -> Measured {
    for _ in 0..warmup_iters {
        black_box(f());
    }

    let before = AllocSnapshot::now();
    let start = Instant::now();
    for _ in 0..iters {
        black_box(f());
    }
    let elapsed = start.elapsed();
    let allocated = AllocSnapshot::now().since(&before);

    let total_ns = elapsed.as_nanos();
    let denom = iters.max(1);
    let ns_per_iter = (total_ns as f64) / (denom as f64);

    Measured {
        iters,
        warmup_iters,
        total_ns,
        ns_per_iter,
        per_iter: MemoryStat {
            bytes: allocated.bytes / denom,
            allocs: allocated.allocs / denom,
        },
    }
}

/// Run `f` with a growing iteration count until one run lasts at least
/// [`BenchConfig::target_time`], and report that run.
///
/// Each round predicts the count needed to hit the target from the previous
/// round's per-iteration time, overshooting by 20%, growing at least by one and
/// at most 100x per round.
pub fn measure_calibrated<T>(cfg: &BenchConfig, mut f: impl FnMut() -> T) -> Measured {
    let target_ns = cfg.target_time().as_nanos();
    let max_iters = cfg.max_iters();

    let mut iters = 1;
    let mut m = measure_fn(iters, cfg.warmup_iters(), &mut f);
    while m.total_ns < target_ns && iters < max_iters {
        iters = next_iters(iters, m.total_ns, target_ns).min(max_iters);
        m = measure_fn(iters, 0, &mut f);
    }
    m.warmup_iters = cfg.warmup_iters();
    m
}

fn next_iters(prev_iters: u64, prev_ns: u128, target_ns: u128) -> u64 {
    let per_iter = (prev_ns / prev_iters.max(1) as u128).max(1);
    let predicted = (target_ns * 6 / 5 / per_iter).min(u64::MAX as u128) as u64;
    predicted
        .min(prev_iters.saturating_mul(100))
        .max(prev_iters + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_fn_runs_warmup_and_timed_iterations() {
        let mut calls = 0u64;
        let m = measure_fn(10, 4, || calls += 1);
        assert_eq!(calls, 14);
        assert_eq!(m.iters, 10);
        assert_eq!(m.warmup_iters, 4);
    }

    #[test]
    fn next_iters_grows_towards_target() {
        // 1 iteration took 1ms, target 100ms: predict 120, capped at 100x.
        assert_eq!(next_iters(1, 1_000_000, 100_000_000), 100);
        // 100 iterations took 10ms, target 100ms: predict 1200.
        assert_eq!(next_iters(100, 10_000_000, 100_000_000), 1_200);
    }

    #[test]
    fn next_iters_always_makes_progress() {
        assert_eq!(next_iters(50, 1_000_000_000, 100_000_000), 51);
    }

    #[test]
    fn calibration_reaches_target_or_cap() {
        let cfg = BenchConfig {
            profile: Profile::Quick,
        };
        let m = measure_calibrated(&cfg, || std::thread::sleep(Duration::from_millis(20)));
        assert!(m.total_ns >= cfg.target_time().as_nanos());
        assert!(m.iters > 1);
        assert_eq!(m.warmup_iters, cfg.warmup_iters());
    }
}
