//! Fixed platform glue every generated program compiles against.

/// The portable boolean. Rust's `bool` has the ABI of C `_Bool`.
pub type Bool = bool;

/// Opaque thread-lock handle, defined by the host runtime's thread layer.
/// Only declared on hosted profiles; embedded profiles have no threads.
#[cfg(not(rt_embedded))]
#[repr(C)]
pub struct ThreadLock {
    _opaque: [u8; 0],
    _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
}
