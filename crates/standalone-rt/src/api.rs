//! The allocation triad generated programs call, whichever backend the
//! build selected.

use crate::allocator::RawAllocator;
use crate::backend::ACTIVE;
use core::ffi::c_void;

/// Allocate `size` bytes. Returns null on exhaustion; nothing is retried.
///
/// # Safety
/// The block must be released with [`release`] or resized with
/// [`reallocate`], never with another allocator.
#[inline]
pub unsafe fn allocate(size: usize) -> *mut u8 {
    ACTIVE.malloc(size)
}

/// Resize a block. Arguments and result pass through unchanged; on failure
/// the old block is left as the backend leaves it.
///
/// # Safety
/// `ptr` must be null or a live block from this module.
#[inline]
pub unsafe fn reallocate(ptr: *mut u8, new_size: usize) -> *mut u8 {
    ACTIVE.realloc(ptr, new_size)
}

/// Release a block. Null is a no-op.
///
/// # Safety
/// `ptr` must be null or a live block from this module, and must not be
/// used afterwards.
#[inline]
pub unsafe fn release(ptr: *mut u8) {
    ACTIVE.free(ptr)
}

// ============================================================================
// C ABI for generated C code
// ============================================================================

#[no_mangle]
pub unsafe extern "C" fn rt_malloc(size: usize) -> *mut c_void {
    allocate(size) as *mut c_void
}

#[no_mangle]
pub unsafe extern "C" fn rt_realloc(ptr: *mut c_void, size: usize) -> *mut c_void {
    reallocate(ptr as *mut u8, size) as *mut c_void
}

#[no_mangle]
pub unsafe extern "C" fn rt_free(ptr: *mut c_void) {
    release(ptr as *mut u8)
}
