//! Build-time configuration.
//!
//! Everything here is fixed when the crate is compiled. build.rs validates
//! `STANDALONE_RT_POISON_BYTE` and forwards it as `RT_POISON_BYTE`.

use crate::build_env::parse_poison_byte;
use crate::profile::{self, PlatformFlags, Profile};

/// Byte written over the leading bytes of a block on release.
pub const POISON_BYTE: u8 = match parse_poison_byte(env!("RT_POISON_BYTE")) {
    Some(byte) => byte,
    None => panic!("RT_POISON_BYTE must be a non-zero byte"),
};

/// Number of leading bytes poisoned on release: one C `int`.
pub const POISON_PREFIX_LEN: usize = core::mem::size_of::<core::ffi::c_int>();

/// Alignment the platform's raw `malloc` always satisfies.
#[cfg(target_pointer_width = "64")]
pub const MIN_ALIGN: usize = 16;
#[cfg(target_pointer_width = "32")]
pub const MIN_ALIGN: usize = 8;
#[cfg(target_pointer_width = "16")]
pub const MIN_ALIGN: usize = 1;

/// The flags this crate was compiled with.
pub const BUILD_FLAGS: PlatformFlags = PlatformFlags::new()
    .embedded_mode(cfg!(rt_embedded))
    .no_pooled_allocator(cfg!(feature = "no-pooled-allocator") || !cfg!(feature = "pooled"))
    .require_pooled_allocator(cfg!(feature = "require-pooled-allocator"))
    .strict(cfg!(feature = "strict-profile"));

/// The resolved profile of this build.
pub const PROFILE: Profile = profile::resolve(BUILD_FLAGS);

// build.rs and the library must agree on the backend.
const _: () = assert!(PROFILE.use_fallback_allocator() == cfg!(rt_backend_fallback));
const _: () = assert!(POISON_BYTE != 0);
