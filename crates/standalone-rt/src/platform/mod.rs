//! The raw platform allocation triad.
//!
//! Every target is assumed to provide `malloc`/`realloc`/`free`. Hosted unix
//! targets reach them through `libc`, Windows through the CRT's aligned
//! family, and everything else links the toolchain's C library directly.
//! Only `bare` lacks an aligned allocator: its `memalign` returns null above
//! `MIN_ALIGN`.

#[cfg(unix)]
pub mod unix;
#[cfg(unix)]
pub use unix as sys;

#[cfg(target_os = "windows")]
pub mod windows;
#[cfg(target_os = "windows")]
pub use windows as sys;

#[cfg(not(any(unix, target_os = "windows")))]
pub mod bare;
#[cfg(not(any(unix, target_os = "windows")))]
pub use bare as sys;

/// Allocate `size` bytes. Returns null on exhaustion.
///
/// # Safety
/// The returned block must only be released through [`raw_free`].
#[inline]
pub unsafe fn raw_alloc(size: usize) -> *mut u8 {
    sys::malloc(size)
}

/// Resize a block. Returns null on failure, leaving `ptr` as the platform
/// `realloc` leaves it.
///
/// # Safety
/// `ptr` must be null or a live block from this module.
#[inline]
pub unsafe fn raw_realloc(ptr: *mut u8, size: usize) -> *mut u8 {
    sys::realloc(ptr, size)
}

/// Return a block to the platform.
///
/// # Safety
/// `ptr` must be null or a live block from this module.
#[inline]
pub unsafe fn raw_free(ptr: *mut u8) {
    sys::free(ptr)
}

/// Allocate `size` bytes aligned to `align`, freeable with [`raw_free`].
/// Returns null when the platform cannot satisfy the alignment.
///
/// # Safety
/// `align` must be a power of two.
#[inline]
pub unsafe fn raw_memalign(align: usize, size: usize) -> *mut u8 {
    sys::memalign(align, size)
}
