//! Startup announcement of the resolved profile.
//!
//! Logging never happens on the allocation paths: a logger may allocate and
//! would re-enter the allocator. Generated programs call [`announce`] once
//! their logger is installed.

use crate::backend;
use crate::config::PROFILE;
use core::sync::atomic::{AtomicBool, Ordering};
use log::{debug, info, warn};

static ANNOUNCED: AtomicBool = AtomicBool::new(false);

/// Log the allocator backend of this build. Only the first call logs;
/// returns whether this call did.
pub fn announce() -> bool {
    if ANNOUNCED.swap(true, Ordering::AcqRel) {
        return false;
    }

    let flags = PROFILE.flags();
    info!(
        target: "standalone_rt",
        "allocator backend: {}",
        backend::BACKEND
    );
    debug!(
        target: "standalone_rt",
        "platform profile: embedded-mode={} no-pooled-allocator={} strict={}",
        flags.embedded_mode,
        flags.no_pooled_allocator,
        flags.strict
    );
    if PROFILE.overridden() {
        warn!(
            target: "standalone_rt",
            "pooled allocator requested but the platform profile selects {}",
            backend::BACKEND
        );
    }
    true
}

/// Whether [`announce`] has already run.
pub fn announced() -> bool {
    ANNOUNCED.load(Ordering::Acquire)
}
