use core::ffi::c_void;
use core::ptr;

#[inline]
pub unsafe fn malloc(size: usize) -> *mut u8 {
    libc::malloc(size) as *mut u8
}

#[inline]
pub unsafe fn realloc(ptr: *mut u8, size: usize) -> *mut u8 {
    libc::realloc(ptr as *mut c_void, size) as *mut u8
}

#[inline]
pub unsafe fn free(ptr: *mut u8) {
    libc::free(ptr as *mut c_void)
}

/// `posix_memalign` wants at least pointer alignment.
pub unsafe fn memalign(align: usize, size: usize) -> *mut u8 {
    let align = align.max(core::mem::size_of::<*mut c_void>());
    let mut out: *mut c_void = ptr::null_mut();
    if libc::posix_memalign(&mut out, align, size) == 0 {
        out as *mut u8
    } else {
        ptr::null_mut()
    }
}
