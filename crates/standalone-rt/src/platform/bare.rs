//! Targets without `libc` bindings (AVR, bare metal, ...). The toolchain's C
//! library (avr-libc, newlib) supplies the symbols.

use crate::config::MIN_ALIGN;
use core::ffi::c_void;
use core::ptr;

extern "C" {
    #[link_name = "malloc"]
    fn c_malloc(size: usize) -> *mut c_void;
    #[link_name = "realloc"]
    fn c_realloc(ptr: *mut c_void, size: usize) -> *mut c_void;
    #[link_name = "free"]
    fn c_free(ptr: *mut c_void);
}

#[inline]
pub unsafe fn malloc(size: usize) -> *mut u8 {
    c_malloc(size) as *mut u8
}

#[inline]
pub unsafe fn realloc(ptr: *mut u8, size: usize) -> *mut u8 {
    c_realloc(ptr as *mut c_void, size) as *mut u8
}

#[inline]
pub unsafe fn free(ptr: *mut u8) {
    c_free(ptr as *mut c_void)
}

/// No portable aligned allocator here; only `malloc`'s own alignment is
/// available.
pub unsafe fn memalign(align: usize, size: usize) -> *mut u8 {
    if align <= MIN_ALIGN {
        malloc(size)
    } else {
        ptr::null_mut()
    }
}
