use std::path::{Path, PathBuf};

use assimp_features::{ResolvedPlan, install};

use crate::build_support::{config::BuildConfig, util};

/// Name of the C++ library (the Assimp core and its formats)
pub const CPP_LIB: &str = "assimp";
/// Name of the C library (bundled zlib, unzip and zip)
pub const C_LIB: &str = "assimp_contrib";

/// Compile every source of the plan into static libraries and stage them in
/// `plan.layout.lib`.
///
/// C and C++ translation units go through separate `cc::Build`s in
/// `cfg.obj_dir()`. Only the finished archives are copied into the layout.
/// The C++ library is linked first because it depends on the C one.
pub fn build(cfg: &BuildConfig, plan: &ResolvedPlan, source_root: &Path) {
    validate_sources(plan, source_root);

    let cpp_sources: Vec<PathBuf> = plan.cpp_sources().map(|s| source_root.join(s)).collect();
    let c_sources: Vec<PathBuf> = plan.c_sources().map(|s| source_root.join(s)).collect();

    if cfg.verbose {
        util::warn(format!(
            "Compiling Assimp: {} C++ and {} C source(s) from {}",
            cpp_sources.len(),
            c_sources.len(),
            source_root.display()
        ));
    }

    let mut cpp = base_build(cfg, plan, source_root);
    cpp.cpp(true);
    cpp.std("c++17");
    cpp.cpp_link_stdlib(None); // system_deps owns the C++ runtime
    cpp.files(&cpp_sources);
    configure_cpp_flags(&mut cpp, cfg);
    cpp.compile(CPP_LIB);

    let mut libs = vec![CPP_LIB];
    if !c_sources.is_empty() {
        let mut c = base_build(cfg, plan, source_root);
        c.files(&c_sources);
        c.compile(C_LIB);
        libs.push(C_LIB);
    }

    let staged = install::install_libraries(&cfg.obj_dir(), plan, &libs).unwrap_or_else(|e| {
        panic!(
            "failed to stage Assimp libraries into {}: {e}",
            plan.layout.lib.display()
        )
    });
    if cfg.verbose {
        util::warn(format!("Staged {} static library file(s)", staged.len()));
    }

    println!(
        "cargo:rustc-link-search=native={}",
        plan.layout.lib.display()
    );
    for lib in libs {
        println!("cargo:rustc-link-lib=static={lib}");
    }
}

fn validate_sources(plan: &ResolvedPlan, source_root: &Path) {
    let missing: Vec<PathBuf> = plan
        .source_paths(source_root)
        .filter(|p| !p.exists())
        .collect();
    if let Some(first) = missing.first() {
        panic!(
            "{} source file(s) listed in the Assimp catalog are missing, first: {}\n\
             Hint: the checkout at {} does not match the catalog's Assimp version.",
            missing.len(),
            first.display(),
            source_root.display()
        );
    }
}

fn base_build(cfg: &BuildConfig, plan: &ResolvedPlan, source_root: &Path) -> cc::Build {
    let mut build = cc::Build::new();
    build.out_dir(cfg.obj_dir());
    // Link directives point at the staged copies in the layout instead.
    build.cargo_metadata(false);
    build.warnings(false);

    // Generated config.h / revision.h take precedence over the checkout.
    build.include(&plan.layout.include);
    build.include(cfg.private_include_dir());
    for dir in &plan.include_dirs {
        build.include(source_root.join(dir));
    }

    for m in &plan.macros {
        build.define(&m.name, m.value.as_deref());
    }

    if cfg.is_windows() && cfg.is_msvc() {
        build.static_crt(cfg.use_static_crt());
    }

    build
}

fn configure_cpp_flags(build: &mut cc::Build, cfg: &BuildConfig) {
    if cfg.is_windows() && cfg.is_msvc() {
        build.flag("/EHsc");
        // Some FBX/IFC translation units exceed the default section limit.
        build.flag("/bigobj");

        // Match Rust's CRT family, but never use the MSVC debug CRT (Rust doesn't link it).
        if cfg.use_static_crt() {
            build.flag("/MT");
        } else {
            build.flag("/MD");
        }

        if cfg.is_debug() {
            build.debug(true);
            build.opt_level(0);
        } else {
            build.debug(false);
            build.opt_level(2);
        }

        build.flag("/D_ITERATOR_DEBUG_LEVEL=0");
        return;
    }

    if cfg.is_macos() {
        build.flag(format!(
            "-mmacosx-version-min={}",
            cfg.macos_deployment_target()
        ));
    }
}
