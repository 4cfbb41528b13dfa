//! The fallback allocator: a thin pass-through to a raw heap that poisons
//! the head of every block it releases.
//!
//! Only compiled into builds whose profile resolves to the fallback backend.

use super::RawAllocator;
use crate::config::{POISON_BYTE, POISON_PREFIX_LEN};

/// Overwrite the leading [`POISON_PREFIX_LEN`] bytes of a block with
/// [`POISON_BYTE`]. The rest of the block is left alone.
///
/// # Safety
/// `ptr` must point to a live block of at least `POISON_PREFIX_LEN` bytes.
#[inline]
pub unsafe fn poison_prefix(ptr: *mut u8) {
    core::ptr::write_bytes(ptr, POISON_BYTE, POISON_PREFIX_LEN);
}

/// Wraps a raw heap and poisons released blocks.
///
/// No bookkeeping is kept; the wrapper adds nothing to allocation and
/// reallocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Poisoning<R> {
    raw: R,
}

impl<R> Poisoning<R> {
    pub const fn new(raw: R) -> Self {
        Poisoning { raw }
    }

    pub fn inner(&self) -> &R {
        &self.raw
    }
}

unsafe impl<R: RawAllocator> RawAllocator for Poisoning<R> {
    #[inline]
    unsafe fn malloc(&self, size: usize) -> *mut u8 {
        self.raw.malloc(size)
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, size: usize) -> *mut u8 {
        self.raw.realloc(ptr, size)
    }

    /// Every raw heap hands out blocks of at least one C `int`, so the
    /// prefix write stays inside the block.
    #[inline]
    unsafe fn free(&self, ptr: *mut u8) {
        if ptr.is_null() {
            return;
        }
        poison_prefix(ptr);
        self.raw.free(ptr);
    }

    #[inline]
    unsafe fn memalign(&self, align: usize, size: usize) -> *mut u8 {
        self.raw.memalign(align, size)
    }
}
