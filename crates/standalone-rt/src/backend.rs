//! The allocator backend chosen for this build.
//!
//! build.rs resolves the platform profile and emits exactly one of
//! `rt_backend_fallback` or `rt_backend_pooled`. The choice is a type, not
//! a runtime switch.

use crate::profile::Backend;

#[cfg(rt_backend_fallback)]
pub type Active = crate::allocator::Poisoning<crate::allocator::SystemHeap>;

#[cfg(rt_backend_pooled)]
pub type Active = crate::allocator::PooledHeap;

#[cfg(rt_backend_fallback)]
pub static ACTIVE: Active = crate::allocator::Poisoning::new(crate::allocator::SystemHeap);

#[cfg(rt_backend_pooled)]
pub static ACTIVE: Active = crate::allocator::PooledHeap;

/// Which backend `ACTIVE` is.
///
/// Pooled builds carry none of the fallback provider:
#[cfg_attr(rt_backend_pooled, doc = "```compile_fail")]
#[cfg_attr(rt_backend_pooled, doc = "let _ = standalone_rt::allocator::fallback::poison_prefix;")]
#[cfg_attr(rt_backend_pooled, doc = "```")]
///
#[cfg_attr(rt_backend_pooled, doc = "```compile_fail")]
#[cfg_attr(
    rt_backend_pooled,
    doc = "let _ = standalone_rt::allocator::Poisoning::new(standalone_rt::allocator::SystemHeap);"
)]
#[cfg_attr(rt_backend_pooled, doc = "```")]
pub const BACKEND: Backend = crate::config::PROFILE.backend();
