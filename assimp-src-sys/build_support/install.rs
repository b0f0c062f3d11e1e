use assimp_features::{FormatCatalog, ResolvedPlan, config_header, install};

use crate::build_support::{config::BuildConfig, util};

/// Lay out headers, generated headers and licenses before compiling.
///
/// `revision.h` goes to the private include directory; it is never installed.
pub fn run(cfg: &BuildConfig, plan: &ResolvedPlan, catalog: &FormatCatalog) {
    let source_root = cfg.assimp_source_dir();
    validate_assimp_source(&source_root);

    let report = install::install(&source_root, plan, catalog).unwrap_or_else(|e| {
        panic!(
            "failed to install Assimp headers and licenses into {}: {e}",
            plan.layout.root.display()
        )
    });

    let private_dir = cfg.private_include_dir();
    config_header::write_revision_h(&source_root, &private_dir, plan).unwrap_or_else(|e| {
        panic!(
            "failed to generate revision.h into {}: {e}",
            private_dir.display()
        )
    });

    if cfg.verbose {
        util::warn(format!(
            "Installed {} header(s) and {} license file(s) into {}",
            report.headers.len(),
            report.licenses.len(),
            plan.layout.root.display()
        ));
    }
}

/// Expose the layout to downstream build scripts (`DEP_ASSIMP_*`).
pub fn emit_metadata(plan: &ResolvedPlan) {
    println!("cargo:root={}", plan.layout.root.display());
    println!("cargo:include={}", plan.layout.include.display());
    println!("cargo:lib={}", plan.layout.lib.display());
    if let Some(joined) = util::join_paths_for_env(&[plan.layout.include.clone()]) {
        println!("cargo:include_paths={}", joined);
    }
}

fn validate_assimp_source(assimp_src: &std::path::Path) {
    if !assimp_src.exists() || !assimp_src.join("include").exists() {
        panic!(
            "Assimp source not found at {}.\n\
             Hint: git submodule update --init --recursive\n\
             or set ASSIMP_DIR=/path/to/assimp",
            assimp_src.display()
        );
    }
}
