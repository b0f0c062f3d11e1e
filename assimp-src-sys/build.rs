mod build_support;

use assimp_features::FormatCatalog;
use build_support::{config::BuildConfig, plan};

fn main() {
    let cfg = BuildConfig::new();
    cfg.emit_rerun_triggers();

    let catalog = FormatCatalog::builtin();
    let resolved = plan::resolve(&cfg, &catalog);

    let built = compile_assimp(&cfg, &resolved, &catalog);
    plan::write_features_rs(&cfg, &resolved, built);
}

#[cfg(feature = "build-assimp")]
fn compile_assimp(
    cfg: &BuildConfig,
    resolved: &assimp_features::ResolvedPlan,
    catalog: &FormatCatalog,
) -> bool {
    use build_support::{compile, install, system_deps};

    if cfg.docs_rs {
        build_support::util::warn("DOCS_RS detected: skipping native build and linking");
        return false;
    }

    // Headers and the generated config.h must exist before anything compiles.
    install::run(cfg, resolved, catalog);

    compile::build(cfg, resolved, &cfg.assimp_source_dir());

    // Ensure the Rust binary links against the correct C++ runtime / platform deps.
    system_deps::emit(cfg);

    install::emit_metadata(resolved);
    true
}

#[cfg(not(feature = "build-assimp"))]
fn compile_assimp(
    _cfg: &BuildConfig,
    _resolved: &assimp_features::ResolvedPlan,
    _catalog: &FormatCatalog,
) -> bool {
    false
}
