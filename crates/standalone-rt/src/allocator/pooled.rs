//! The external pooled allocator service (mimalloc), consumed opaquely.

use super::RawAllocator;
use core::ffi::c_void;
use libmimalloc_sys as mi;

#[derive(Clone, Copy, Debug, Default)]
pub struct PooledHeap;

unsafe impl RawAllocator for PooledHeap {
    #[inline]
    unsafe fn malloc(&self, size: usize) -> *mut u8 {
        mi::mi_malloc(size) as *mut u8
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, size: usize) -> *mut u8 {
        mi::mi_realloc(ptr as *mut c_void, size) as *mut u8
    }

    #[inline]
    unsafe fn free(&self, ptr: *mut u8) {
        mi::mi_free(ptr as *mut c_void)
    }

    #[inline]
    unsafe fn memalign(&self, align: usize, size: usize) -> *mut u8 {
        mi::mi_malloc_aligned(size, align) as *mut u8
    }
}
