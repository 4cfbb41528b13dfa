#[allow(dead_code)]
#[path = "src/profile.rs"]
mod profile;

#[allow(dead_code)]
#[path = "src/build_env.rs"]
mod build_env;

use build_env::{parse_poison_byte, DEFAULT_POISON_BYTE, POISON_BYTE_VAR};
use profile::{Backend, PlatformFlags};
use std::env;

fn main() {
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    for backend in [Backend::Fallback, Backend::Pooled] {
        println!("cargo:rustc-check-cfg=cfg({})", backend.cfg_name());
    }
    println!("cargo:rustc-check-cfg=cfg(rt_embedded)");

    // AVR and bare-metal targets have no heap worth pooling.
    let embedded_target = target_arch == "avr" || target_os == "none";

    let flags = PlatformFlags::new()
        .embedded_mode(feature("EMBEDDED_MODE") || embedded_target)
        .no_pooled_allocator(feature("NO_POOLED_ALLOCATOR") || !feature("POOLED"))
        .require_pooled_allocator(feature("REQUIRE_POOLED_ALLOCATOR"))
        .strict(feature("STRICT_PROFILE"));

    let profile = match profile::resolve_checked(flags) {
        Ok(profile) => profile,
        Err(err) => panic!("invalid platform profile: {}", err),
    };

    if profile.overridden() {
        println!(
            "cargo:warning=standalone-rt: pooled allocator requested but the platform profile forces the {} backend",
            profile.backend()
        );
    }

    println!("cargo:rustc-cfg={}", profile.backend().cfg_name());
    if profile.flags().embedded_mode {
        println!("cargo:rustc-cfg=rt_embedded");
    }

    let poison = match env::var(POISON_BYTE_VAR) {
        Ok(raw) => match parse_poison_byte(&raw) {
            Some(byte) => byte,
            None => panic!(
                "{} must be a non-zero byte (decimal or 0x hex), got {:?}",
                POISON_BYTE_VAR, raw
            ),
        },
        Err(_) => DEFAULT_POISON_BYTE,
    };
    println!("cargo:rustc-env=RT_POISON_BYTE={}", poison);
    println!("cargo:rerun-if-env-changed={}", POISON_BYTE_VAR);
    println!("cargo:rerun-if-changed=src/profile.rs");
    println!("cargo:rerun-if-changed=src/build_env.rs");
}

fn feature(name: &str) -> bool {
    env::var_os(format!("CARGO_FEATURE_{}", name)).is_some()
}

