//! `#[global_allocator]` adapter over the build's backend.
//!
//! Rust-side allocations share one heap with the C triad, and on fallback
//! builds every `dealloc` poisons just like `rt_free` does:
//!
//! ```rust,ignore
//! use standalone_rt::RuntimeAlloc;
//!
//! #[global_allocator]
//! static GLOBAL: RuntimeAlloc = RuntimeAlloc;
//! ```

use crate::allocator::RawAllocator;
use crate::backend::ACTIVE;
use core::alloc::{GlobalAlloc, Layout};

/// Routes `GlobalAlloc` through [`ACTIVE`](crate::backend::ACTIVE).
pub struct RuntimeAlloc;

/// Zero-sized layouts never reach the backend.
#[inline]
fn dangling(layout: Layout) -> *mut u8 {
    layout.align() as *mut u8
}

unsafe impl GlobalAlloc for RuntimeAlloc {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        match layout.size() {
            0 => dangling(layout),
            size => ACTIVE.alloc_aligned(layout.align(), size),
        }
    }

    #[inline]
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.alloc(layout);
        if !ptr.is_null() && layout.size() != 0 {
            core::ptr::write_bytes(ptr, 0, layout.size());
        }
        ptr
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if layout.size() != 0 {
            ACTIVE.free(ptr);
        }
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if layout.size() == 0 {
            return self.alloc(Layout::from_size_align_unchecked(new_size, layout.align()));
        }
        ACTIVE.realloc_aligned(ptr, layout.size(), layout.align(), new_size)
    }
}
