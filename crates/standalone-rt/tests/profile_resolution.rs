//! Platform profile resolution tests.

use standalone_rt::profile::{self, resolve, resolve_checked, resolve_strict};
use standalone_rt::{Backend, PlatformFlags, ProfileError};

fn flags(embedded: bool, no_pooled: bool) -> PlatformFlags {
    PlatformFlags::new()
        .embedded_mode(embedded)
        .no_pooled_allocator(no_pooled)
}

// ---------------------------------------------------------------------------
// use_fallback_allocator == embedded-mode OR no-pooled-allocator
// ---------------------------------------------------------------------------

#[test]
fn all_flag_combinations() {
    let cases = [
        (false, false, false),
        (false, true, true),
        (true, false, true),
        (true, true, true),
    ];
    for (embedded, no_pooled, fallback) in cases {
        let profile = resolve(flags(embedded, no_pooled));
        assert_eq!(
            profile.use_fallback_allocator(),
            fallback,
            "embedded-mode={} no-pooled-allocator={}",
            embedded,
            no_pooled
        );
    }
}

#[test]
fn embedded_only_implies_no_pooled() {
    let profile = resolve(flags(true, false));
    assert_eq!(profile.backend(), Backend::Fallback);
    assert!(profile.flags().no_pooled_allocator, "implication was not applied");
    assert!(profile.flags().embedded_mode);
}

#[test]
fn no_flags_selects_pooled() {
    let profile = resolve(PlatformFlags::default());
    assert_eq!(profile.backend(), Backend::Pooled);
    assert!(!profile.overridden());
}

#[test]
fn resolution_is_usable_in_const_context() {
    const PROFILE: profile::Profile = resolve(PlatformFlags::new().embedded_mode(true));
    const _: () = assert!(PROFILE.use_fallback_allocator());
    assert_eq!(PROFILE.backend().name(), "fallback");
}

// ---------------------------------------------------------------------------
// Contradictory requests
// ---------------------------------------------------------------------------

#[test]
fn no_combination_gives_pooled_on_embedded() {
    for no_pooled in [false, true] {
        for require in [false, true] {
            let f = flags(true, no_pooled).require_pooled_allocator(require);
            assert_eq!(resolve(f).backend(), Backend::Fallback);
        }
    }
}

#[test]
fn lenient_mode_overrides_toward_fallback() {
    let f = flags(true, false).require_pooled_allocator(true);
    let profile = resolve_checked(f).expect("lenient resolution never fails");
    assert_eq!(profile.backend(), Backend::Fallback);
    assert!(profile.overridden());
}

#[test]
fn strict_mode_rejects_contradictions() {
    let f = flags(true, false).require_pooled_allocator(true);
    assert_eq!(resolve_strict(f), Err(ProfileError::PooledOnEmbedded));
    assert_eq!(
        resolve_checked(f.strict(true)),
        Err(ProfileError::PooledOnEmbedded)
    );

    let f = flags(false, true).require_pooled_allocator(true);
    assert_eq!(resolve_strict(f), Err(ProfileError::PooledWhenDisabled));
}

#[test]
fn strict_mode_accepts_consistent_flags() {
    for (embedded, no_pooled) in [(false, false), (false, true), (true, false), (true, true)] {
        let f = flags(embedded, no_pooled).strict(true);
        assert_eq!(resolve_checked(f), Ok(resolve(f)));
    }
    let f = PlatformFlags::new().require_pooled_allocator(true).strict(true);
    assert_eq!(resolve_checked(f).map(|p| p.backend()), Ok(Backend::Pooled));
}

#[test]
fn profile_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(ProfileError::PooledOnEmbedded);
    assert!(err.to_string().contains("embedded-mode"));
}

// ---------------------------------------------------------------------------
// The profile this crate was built with
// ---------------------------------------------------------------------------

#[test]
fn build_profile_follows_features() {
    let expected_fallback = cfg!(feature = "embedded-mode") || cfg!(feature = "no-pooled-allocator");
    if expected_fallback {
        assert_eq!(standalone_rt::PROFILE.backend(), Backend::Fallback);
    }
    assert_eq!(standalone_rt::BACKEND, standalone_rt::PROFILE.backend());
}
