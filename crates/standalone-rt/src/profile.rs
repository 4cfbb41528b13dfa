//! Platform profile resolution.
//!
//! This file is also compiled into `build.rs` through `#[path]`, so it must
//! only depend on `core`.

use core::fmt;

/// Build-time flags describing the target platform.
///
/// Every field defaults to `false` (flag absent).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformFlags {
    /// The target has no heap services worth pooling.
    pub embedded_mode: bool,
    /// Force the fallback allocator even on a hosted profile.
    pub no_pooled_allocator: bool,
    /// The build explicitly asked for the pooled allocator.
    pub require_pooled_allocator: bool,
    /// Reject contradictory requests instead of overriding them.
    pub strict: bool,
}

impl PlatformFlags {
    pub const fn new() -> Self {
        PlatformFlags {
            embedded_mode: false,
            no_pooled_allocator: false,
            require_pooled_allocator: false,
            strict: false,
        }
    }

    pub const fn embedded_mode(mut self, on: bool) -> Self {
        self.embedded_mode = on;
        self
    }

    pub const fn no_pooled_allocator(mut self, on: bool) -> Self {
        self.no_pooled_allocator = on;
        self
    }

    pub const fn require_pooled_allocator(mut self, on: bool) -> Self {
        self.require_pooled_allocator = on;
        self
    }

    pub const fn strict(mut self, on: bool) -> Self {
        self.strict = on;
        self
    }

    /// Apply the implication rule: `embedded_mode` implies
    /// `no_pooled_allocator`.
    pub const fn normalize(mut self) -> Self {
        if self.embedded_mode {
            self.no_pooled_allocator = true;
        }
        self
    }

    /// `true` when the flags ask for something the profile cannot give.
    pub const fn is_contradictory(&self) -> bool {
        let n = self.normalize();
        n.require_pooled_allocator && n.no_pooled_allocator
    }
}

/// Which allocator implementation a build links against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Raw platform primitives with poison-on-release.
    Fallback,
    /// The external pooled allocator service.
    Pooled,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Fallback => "fallback",
            Backend::Pooled => "pooled",
        }
    }

    /// Name of the `cfg` that build.rs emits for this backend.
    pub const fn cfg_name(self) -> &'static str {
        match self {
            Backend::Fallback => "rt_backend_fallback",
            Backend::Pooled => "rt_backend_pooled",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The resolved, normalized configuration of a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    flags: PlatformFlags,
    backend: Backend,
    overridden: bool,
}

impl Profile {
    /// The flags after normalization.
    pub const fn flags(&self) -> PlatformFlags {
        self.flags
    }

    pub const fn backend(&self) -> Backend {
        self.backend
    }

    pub const fn use_fallback_allocator(&self) -> bool {
        matches!(self.backend, Backend::Fallback)
    }

    /// An explicit pooled request lost to the fallback path.
    pub const fn overridden(&self) -> bool {
        self.overridden
    }
}

/// A flag combination that strict mode refuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// Pooled allocator requested on an embedded profile.
    PooledOnEmbedded,
    /// Pooled allocator requested while `no-pooled-allocator` is set.
    PooledWhenDisabled,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::PooledOnEmbedded => f.write_str(
                "`require-pooled-allocator` conflicts with `embedded-mode`: \
                 embedded profiles always use the fallback allocator",
            ),
            ProfileError::PooledWhenDisabled => f.write_str(
                "`require-pooled-allocator` conflicts with `no-pooled-allocator` \
                 (or a build without the `pooled` feature)",
            ),
        }
    }
}

impl core::error::Error for ProfileError {}

/// Resolve flags with silent precedence: any fallback-forcing flag wins.
pub const fn resolve(flags: PlatformFlags) -> Profile {
    let flags = flags.normalize();
    let use_fallback = flags.embedded_mode || flags.no_pooled_allocator;
    Profile {
        flags,
        backend: if use_fallback {
            Backend::Fallback
        } else {
            Backend::Pooled
        },
        overridden: use_fallback && flags.require_pooled_allocator,
    }
}

/// Resolve flags, rejecting any explicit pooled request that cannot be met.
pub const fn resolve_strict(flags: PlatformFlags) -> Result<Profile, ProfileError> {
    if flags.require_pooled_allocator {
        if flags.embedded_mode {
            return Err(ProfileError::PooledOnEmbedded);
        }
        if flags.no_pooled_allocator {
            return Err(ProfileError::PooledWhenDisabled);
        }
    }
    Ok(resolve(flags))
}

/// Resolve flags under the policy the flags themselves select.
pub const fn resolve_checked(flags: PlatformFlags) -> Result<Profile, ProfileError> {
    if flags.strict {
        resolve_strict(flags)
    } else {
        Ok(resolve(flags))
    }
}
