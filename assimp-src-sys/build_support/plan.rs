use std::fmt::Write as _;

use assimp_features::{BuildRequest, Error, FormatCatalog, FormatSelection, ResolvedPlan};

use crate::build_support::{config::BuildConfig, util};

/// Resolve the plan for this build. Unknown format names abort the build.
pub fn resolve(cfg: &BuildConfig, catalog: &FormatCatalog) -> ResolvedPlan {
    let request = BuildRequest {
        formats: FormatSelection::parse(&cfg.formats),
        double_precision: cfg.double_precision,
        platform: cfg.platform(),
        install_prefix: cfg.out_dir.clone(),
    };

    let plan = match assimp_features::resolve(&request, catalog) {
        Ok(plan) => plan,
        Err(Error::UnknownFormat { name, known }) => {
            panic!(
                "ASSIMP_FORMATS names an unknown format: `{name}`\n\
                 Valid formats: {}\n\
                 Hint: format names are case-sensitive; use `all` to build every format.",
                known.join(", ")
            );
        }
        Err(e) => panic!("failed to resolve the Assimp build plan: {e}"),
    };

    for name in &plan.disabled_formats {
        if catalog.is_unsupported(name) && requested_explicitly(&request.formats, name) {
            util::warn(format!(
                "format `{name}` is not supported on this toolchain and will not be built"
            ));
        }
    }

    if cfg.verbose {
        util::warn(format!(
            "Assimp plan: target={} formats={:?} sources={} macros={} double={}",
            plan.platform,
            plan.formats,
            plan.sources.len(),
            plan.macros.len(),
            plan.double_precision
        ));
        util::warn(format!("Assimp layout: {}", plan.layout.root.display()));
    }

    plan
}

fn requested_explicitly(selection: &FormatSelection, name: &str) -> bool {
    matches!(selection, FormatSelection::List(names) if names.iter().any(|n| n == name))
}

/// Write `$OUT_DIR/features.rs`, included by `src/lib.rs`.
pub fn write_features_rs(cfg: &BuildConfig, plan: &ResolvedPlan, built: bool) {
    let mut body = String::new();
    let _ = writeln!(body, "/// Formats compiled into this build, in catalog order.");
    let _ = writeln!(
        body,
        "pub const ENABLED_FORMATS: &[&str] = &{:?};",
        plan.formats
    );
    let _ = writeln!(body, "/// Formats compiled out of this build.");
    let _ = writeln!(
        body,
        "pub const DISABLED_FORMATS: &[&str] = &{:?};",
        plan.disabled_formats
    );
    let _ = writeln!(body, "/// Whether scene data is stored as `double`.");
    let _ = writeln!(
        body,
        "pub const DOUBLE_PRECISION: bool = {};",
        plan.double_precision
    );
    let _ = writeln!(body, "/// `<arch>_<os>_<abi>` directory of this target.");
    let _ = writeln!(
        body,
        "pub const TARGET_TAG: &str = {:?};",
        plan.platform.tag()
    );
    let _ = writeln!(body, "/// Whether the C/C++ sources were compiled and linked.");
    let _ = writeln!(body, "pub const BUILT_FROM_SOURCE: bool = {built};");

    let out_file = cfg.out_dir.join("features.rs");
    std::fs::write(&out_file, body)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", out_file.display(), e));
}
