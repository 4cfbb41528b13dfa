//! Passthrough allocator: delegates straight to the platform heap.
//!
//! No bootstrap buffer is needed because the exported symbols use their own
//! names (`rt_malloc`, ...) and never shadow the platform's `malloc`.

use super::RawAllocator;
use crate::platform;

/// The platform's raw `malloc`/`realloc`/`free`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHeap;

unsafe impl RawAllocator for SystemHeap {
    #[inline]
    unsafe fn malloc(&self, size: usize) -> *mut u8 {
        platform::raw_alloc(size)
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, size: usize) -> *mut u8 {
        platform::raw_realloc(ptr, size)
    }

    #[inline]
    unsafe fn free(&self, ptr: *mut u8) {
        platform::raw_free(ptr)
    }

    #[inline]
    unsafe fn memalign(&self, align: usize, size: usize) -> *mut u8 {
        platform::raw_memalign(align, size)
    }
}
