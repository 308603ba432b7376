//! Process-wide allocation accounting.
//!
//! [`CountingAlloc`] forwards to the system allocator and keeps running totals of
//! bytes and blocks handed out. The totals only grow; frees are not subtracted, so the
//! difference between two [`AllocSnapshot`]s is everything allocated in between, even
//! if it was freed again before the second snapshot.
//!
//! The counters are global. Deltas are only meaningful while no other thread is
//! allocating.

use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::schema::MemoryStat;

static ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);
static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// Counting wrapper around [`System`]. Register it in the final binary:
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: domxml_membench::alloc::CountingAlloc = domxml_membench::alloc::CountingAlloc;
/// ```
pub struct CountingAlloc;

#[inline]
fn record(size: usize) {
    ALLOCATED_BYTES.fetch_add(size as u64, Ordering::SeqCst);
    ALLOCATIONS.fetch_add(1, Ordering::SeqCst);
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ret = System.alloc(layout);
        if !ret.is_null() {
            record(layout.size());
        }
        ret
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ret = System.alloc_zeroed(layout);
        if !ret.is_null() {
            record(layout.size());
        }
        ret
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
    }

    // A successful realloc counts as a fresh block of the new size.
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let ret = System.realloc(ptr, layout, new_size);
        if !ret.is_null() {
            record(new_size);
        }
        ret
    }
}

/// Cumulative counter values at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocSnapshot {
    pub bytes: u64,
    pub allocs: u64,
}

impl AllocSnapshot {
    pub fn now() -> Self {
        Self {
            bytes: ALLOCATED_BYTES.load(Ordering::SeqCst),
            allocs: ALLOCATIONS.load(Ordering::SeqCst),
        }
    }

    /// Allocations recorded between `earlier` and `self`.
    pub fn since(&self, earlier: &AllocSnapshot) -> MemoryStat {
        MemoryStat {
            bytes: self.bytes.saturating_sub(earlier.bytes),
            allocs: self.allocs.saturating_sub(earlier.allocs),
        }
    }
}

/// Whether [`CountingAlloc`] is the active global allocator.
pub fn is_active() -> bool {
    let before = AllocSnapshot::now();
    black_box(Box::new(0u64));
    AllocSnapshot::now().allocs > before.allocs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_subtracts_counters() {
        let a = AllocSnapshot { bytes: 100, allocs: 3 };
        let b = AllocSnapshot { bytes: 612, allocs: 10 };
        assert_eq!(b.since(&a), MemoryStat { bytes: 512, allocs: 7 });
    }

    #[test]
    fn since_never_underflows() {
        let a = AllocSnapshot { bytes: 100, allocs: 3 };
        assert_eq!(AllocSnapshot::default().since(&a), MemoryStat::default());
    }

    // The unit test binary runs on the plain system allocator.
    #[test]
    fn inactive_without_global_registration() {
        assert!(!is_active());
    }
}
