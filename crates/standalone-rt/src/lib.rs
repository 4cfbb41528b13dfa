//! Runtime bootstrap for generated standalone programs.
//!
//! The allocator backend is resolved once, at build time, from the platform
//! profile flags (see [`profile`]). Generated code calls the triad in
//! [`api`] and never learns which backend it got.

#![cfg_attr(not(test), no_std)]

pub mod allocator;
pub mod api;
pub mod backend;
mod build_env;
pub mod config;
pub mod init;
pub mod platform;
pub mod prereq;
pub mod profile;

#[cfg(feature = "global-allocator")]
mod global_alloc;
#[cfg(feature = "global-allocator")]
pub use global_alloc::RuntimeAlloc;

pub use api::{allocate, reallocate, release};
pub use backend::BACKEND;
pub use config::PROFILE;
pub use profile::{Backend, PlatformFlags, Profile, ProfileError};
