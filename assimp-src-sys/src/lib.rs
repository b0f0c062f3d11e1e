//! Builds the Assimp 3D asset import library from source
//!
//! The build script resolves which formats to compile from the
//! `ASSIMP_FORMATS` environment variable (`all`, or a comma-separated list of
//! case-sensitive format names; unset means no optional format). With the
//! `build-assimp` feature it compiles the selected sources with `cc` and links
//! the resulting static libraries. Downstream build scripts find the installed
//! headers through `DEP_ASSIMP_INCLUDE`.
//!
//! The resolved configuration is exposed as constants below.

// Generated by build.rs
include!(concat!(env!("OUT_DIR"), "/features.rs"));

/// Version information for this crate
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check whether a format was compiled into this build (case-sensitive)
pub fn is_format_enabled(name: &str) -> bool {
    ENABLED_FORMATS.contains(&name)
}
