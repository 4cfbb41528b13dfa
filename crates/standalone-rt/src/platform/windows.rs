//! Windows CRT. Plain `free` cannot release an over-aligned block, so every
//! block goes through the `_aligned_*` family and one `free` covers them all.

use crate::config::MIN_ALIGN;
use core::ffi::c_void;

extern "C" {
    fn _aligned_malloc(size: usize, alignment: usize) -> *mut c_void;
    fn _aligned_realloc(ptr: *mut c_void, size: usize, alignment: usize) -> *mut c_void;
    fn _aligned_free(ptr: *mut c_void);
}

#[inline]
pub unsafe fn malloc(size: usize) -> *mut u8 {
    _aligned_malloc(size, MIN_ALIGN) as *mut u8
}

/// Only valid for blocks allocated at `MIN_ALIGN`; over-aligned blocks are
/// resized by the caller through memalign + copy + free.
#[inline]
pub unsafe fn realloc(ptr: *mut u8, size: usize) -> *mut u8 {
    _aligned_realloc(ptr as *mut c_void, size, MIN_ALIGN) as *mut u8
}

#[inline]
pub unsafe fn free(ptr: *mut u8) {
    _aligned_free(ptr as *mut c_void)
}

pub unsafe fn memalign(align: usize, size: usize) -> *mut u8 {
    _aligned_malloc(size, align.max(MIN_ALIGN)) as *mut u8
}
