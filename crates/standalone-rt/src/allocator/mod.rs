#[cfg(any(rt_backend_fallback, test))]
pub mod fallback;
pub mod passthrough;
#[cfg(rt_backend_pooled)]
pub mod pooled;

#[cfg(any(rt_backend_fallback, test))]
pub use fallback::Poisoning;

use crate::config::MIN_ALIGN;
pub use passthrough::SystemHeap;
#[cfg(rt_backend_pooled)]
pub use pooled::PooledHeap;

/// The allocation triad every backend provides, plus an aligned variant.
///
/// Implementations forward to some underlying heap and add no locking of
/// their own; thread safety is whatever that heap guarantees.
///
/// # Safety
/// Blocks returned by `malloc`, `realloc` and `memalign` must be accepted by
/// `free` and `realloc` of the same implementation.
pub unsafe trait RawAllocator {
    /// Allocate `size` bytes, or return null.
    unsafe fn malloc(&self, size: usize) -> *mut u8;

    /// Resize `ptr` to `size` bytes, or return null.
    ///
    /// # Safety
    /// `ptr` must be null or a live block of this allocator.
    unsafe fn realloc(&self, ptr: *mut u8, size: usize) -> *mut u8;

    /// Release `ptr`. Null is ignored.
    ///
    /// # Safety
    /// `ptr` must be null or a live block of this allocator.
    unsafe fn free(&self, ptr: *mut u8);

    /// Allocate `size` bytes aligned to `align`, or return null.
    ///
    /// # Safety
    /// `align` must be a power of two.
    unsafe fn memalign(&self, align: usize, size: usize) -> *mut u8;

    /// Allocate for an alignment, using plain `malloc` whenever the
    /// platform's own alignment already covers it.
    ///
    /// # Safety
    /// `align` must be a power of two.
    #[inline]
    unsafe fn alloc_aligned(&self, align: usize, size: usize) -> *mut u8 {
        if align <= MIN_ALIGN {
            self.malloc(size)
        } else {
            self.memalign(align, size)
        }
    }

    /// Resize a block allocated with [`alloc_aligned`](Self::alloc_aligned).
    ///
    /// Raw `realloc` only keeps `MIN_ALIGN`, so over-aligned blocks move to a
    /// fresh `memalign` block and the old one goes through `free`. On
    /// failure the old block is untouched and null is returned.
    ///
    /// # Safety
    /// `ptr` must be a live block of at least `old_size` bytes allocated with
    /// `align`.
    unsafe fn realloc_aligned(
        &self,
        ptr: *mut u8,
        old_size: usize,
        align: usize,
        new_size: usize,
    ) -> *mut u8 {
        if align <= MIN_ALIGN {
            return self.realloc(ptr, new_size);
        }
        let moved = self.memalign(align, new_size);
        if moved.is_null() {
            return moved;
        }
        core::ptr::copy_nonoverlapping(ptr, moved, old_size.min(new_size));
        self.free(ptr);
        moved
    }
}
