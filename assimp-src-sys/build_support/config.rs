use std::{env, path::PathBuf};

use assimp_features::Platform;

#[derive(Clone, Debug)]
#[cfg_attr(not(feature = "build-assimp"), allow(dead_code))]
pub struct BuildConfig {
    pub manifest_dir: PathBuf,
    pub out_dir: PathBuf,
    pub target_arch: String,
    pub target_os: String,
    pub target_env: String,
    pub profile: String,
    pub target_features: String,
    /// Raw `ASSIMP_FORMATS` value: a comma-separated list or `all`.
    pub formats: String,
    pub double_precision: bool,
    pub docs_rs: bool,
    pub verbose: bool,
}

#[cfg_attr(not(feature = "build-assimp"), allow(dead_code))]
impl BuildConfig {
    pub fn new() -> Self {
        Self {
            manifest_dir: PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap()),
            out_dir: PathBuf::from(env::var("OUT_DIR").unwrap()),
            target_arch: env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default(),
            target_os: env::var("CARGO_CFG_TARGET_OS").unwrap_or_default(),
            target_env: env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default(),
            profile: env::var("PROFILE").unwrap_or_else(|_| "release".to_string()),
            target_features: env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default(),
            formats: env::var("ASSIMP_FORMATS").unwrap_or_default(),
            double_precision: cfg!(feature = "double-precision"),
            docs_rs: env::var("DOCS_RS").is_ok(),
            verbose: env::var("ASSIMP_VERBOSE").is_ok(),
        }
    }

    /// Target tags as seen by the resolver; an empty `target_env` becomes `none`.
    pub fn platform(&self) -> Platform {
        Platform::new(&self.target_arch, &self.target_os, &self.target_env)
    }

    pub fn is_windows(&self) -> bool {
        self.target_os == "windows"
    }

    pub fn is_macos(&self) -> bool {
        self.target_os == "macos"
    }

    pub fn is_msvc(&self) -> bool {
        self.target_env == "msvc"
    }

    pub fn is_debug(&self) -> bool {
        self.profile == "debug"
    }

    pub fn use_static_crt(&self) -> bool {
        self.is_windows()
            && self.is_msvc()
            && self
                .target_features
                .split(',')
                .any(|f| f.trim() == "crt-static")
    }

    pub fn macos_deployment_target(&self) -> String {
        env::var("MACOSX_DEPLOYMENT_TARGET").unwrap_or_else(|_| "10.12".to_string())
    }

    pub fn assimp_source_dir(&self) -> PathBuf {
        env::var("ASSIMP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| self.manifest_dir.join("assimp"))
    }

    /// Scratch directory for object files; never part of the install layout.
    pub fn obj_dir(&self) -> PathBuf {
        self.out_dir.join("obj")
    }

    /// Include directory for headers only the Assimp sources see (`revision.h`).
    pub fn private_include_dir(&self) -> PathBuf {
        self.out_dir.join("include-private")
    }

    pub fn emit_rerun_triggers(&self) {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=build_support");

        // Cargo does not watch git submodules; track the inputs the plan depends on.
        let assimp_dir = self.assimp_source_dir();
        for p in [
            assimp_dir.join("include").join("assimp").join("config.h.in"),
            assimp_dir.join("code").join("Common").join("revision.h.in"),
            assimp_dir.join("include").join("assimp").join("version.h"),
        ] {
            if p.exists() {
                println!("cargo:rerun-if-changed={}", p.display());
            }
        }

        // Build inputs
        println!("cargo:rerun-if-env-changed=ASSIMP_DIR");
        println!("cargo:rerun-if-env-changed=ASSIMP_FORMATS");
        println!("cargo:rerun-if-env-changed=ASSIMP_VERBOSE");

        // Toolchain knobs
        println!("cargo:rerun-if-env-changed=MACOSX_DEPLOYMENT_TARGET");
    }
}
