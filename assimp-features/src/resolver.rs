//! Feature resolution: request + catalog -> plan

use std::collections::HashSet;

use crate::catalog::FormatCatalog;
use crate::error::{Error, Result};
use crate::macros::{self, Macro};
use crate::plan::{InstallLayout, ResolvedPlan};
use crate::request::{BuildRequest, FormatSelection};

/// Resolve a build request against a catalog.
///
/// Fails with [`Error::UnknownFormat`] on the first requested name that is
/// not catalogued; nothing is selected in that case. Unsupported formats are
/// dropped from the selection even when named explicitly.
///
/// The result only depends on the arguments.
pub fn resolve(request: &BuildRequest, catalog: &FormatCatalog) -> Result<ResolvedPlan> {
    let requested = select(&request.formats, catalog)?;

    let mut formats = Vec::new();
    let mut disabled_formats = Vec::new();
    for name in catalog.format_names() {
        if requested.contains(name) && !catalog.is_unsupported(name) {
            formats.push(name.to_string());
        } else {
            if requested.contains(name) && matches!(request.formats, FormatSelection::List(_)) {
                log::warn!(
                    "format `{name}` is not supported on this toolchain and will not be built"
                );
            }
            disabled_formats.push(name.to_string());
        }
    }

    let sources = collect_sources(catalog, &formats);
    let macros = collect_macros(request, &disabled_formats);

    log::debug!(
        "resolved {} format(s), {} source file(s), {} macro(s) for {}",
        formats.len(),
        sources.len(),
        macros.len(),
        request.platform
    );

    Ok(ResolvedPlan {
        platform: request.platform.clone(),
        formats,
        disabled_formats,
        sources,
        include_dirs: catalog.include_dirs().to_vec(),
        macros,
        double_precision: request.double_precision,
        layout: InstallLayout::new(&request.install_prefix, &request.platform),
    })
}

fn select<'a>(
    selection: &'a FormatSelection,
    catalog: &'a FormatCatalog,
) -> Result<HashSet<&'a str>> {
    match selection {
        FormatSelection::All => Ok(catalog.format_names().collect()),
        FormatSelection::List(names) => {
            let mut selected = HashSet::new();
            for name in names {
                if !catalog.contains(name) {
                    return Err(Error::unknown_format(
                        name.as_str(),
                        catalog.sorted_format_names(),
                    ));
                }
                selected.insert(name.as_str());
            }
            Ok(selected)
        }
    }
}

fn collect_sources(catalog: &FormatCatalog, formats: &[String]) -> Vec<String> {
    let format_files = formats
        .iter()
        .filter_map(|name| catalog.files(name))
        .flatten();

    let mut seen = HashSet::new();
    catalog
        .common_sources()
        .iter()
        .chain(catalog.support_libraries().values().flatten())
        .chain(format_files)
        .filter(|file| seen.insert(file.as_str()))
        .cloned()
        .collect()
}

fn collect_macros(request: &BuildRequest, disabled_formats: &[String]) -> Vec<Macro> {
    let mut out: Vec<Macro> = macros::baseline_macros().into();

    for name in disabled_formats {
        out.extend(macros::disable_pair(name));
    }

    if request.double_precision {
        out.push(Macro::flag(macros::DOUBLE_PRECISION));
    }

    if request.platform.is_windows() {
        out.extend(macros::windows_macros());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormatEntry;
    use crate::request::Platform;
    use std::collections::{BTreeMap, BTreeSet};

    fn small_catalog() -> FormatCatalog {
        FormatCatalog::new(
            vec!["core.cpp".into()],
            BTreeMap::from([("zlib".to_string(), vec!["zlib.c".to_string()])]),
            vec![
                FormatEntry {
                    name: "LWO".into(),
                    files: vec!["lwo.cpp".into(), "anim.cpp".into()],
                },
                FormatEntry {
                    name: "LWS".into(),
                    files: vec!["lws.cpp".into(), "anim.cpp".into()],
                },
                FormatEntry {
                    name: "C4D".into(),
                    files: vec!["c4d.cpp".into()],
                },
            ],
            BTreeSet::from(["C4D".to_string()]),
        )
        .unwrap()
    }

    fn linux() -> BuildRequest {
        BuildRequest::new(Platform::new("x86_64", "linux", "gnu"))
    }

    #[test]
    fn test_shared_files_appear_once() {
        let plan = resolve(&linux().with_formats("LWO,LWS"), &small_catalog()).unwrap();
        assert_eq!(
            plan.sources,
            ["core.cpp", "zlib.c", "lwo.cpp", "anim.cpp", "lws.cpp"]
        );
    }

    #[test]
    fn test_unsupported_is_dropped_from_explicit_request() {
        let plan = resolve(&linux().with_formats("C4D,LWO"), &small_catalog()).unwrap();
        assert_eq!(plan.formats, ["LWO"]);
        assert!(!plan.sources.contains(&"c4d.cpp".to_string()));
        assert!(plan.defines("ASSIMP_BUILD_NO_C4D_IMPORTER"));
        assert!(plan.defines("ASSIMP_BUILD_NO_C4D_EXPORTER"));
    }

    #[test]
    fn test_unknown_format_fails_before_anything_is_selected() {
        let err = resolve(&linux().with_formats("LWO,lws"), &small_catalog()).unwrap_err();
        match err {
            Error::UnknownFormat { name, known } => {
                assert_eq!(name, "lws");
                assert_eq!(known, ["C4D", "LWO", "LWS"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_macro_order_is_stable() {
        let plan = resolve(
            &linux().with_formats("LWO").with_double_precision(true),
            &small_catalog(),
        )
        .unwrap();
        let names: Vec<&str> = plan.macros.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "RAPIDJSON_HAS_STDSTRING",
                "RAPIDJSON_NOMEMBERITERATORCLASS",
                "OPENDDLPARSER_BUILD",
                "ASSIMP_BUILD_NO_LWS_IMPORTER",
                "ASSIMP_BUILD_NO_LWS_EXPORTER",
                "ASSIMP_BUILD_NO_C4D_IMPORTER",
                "ASSIMP_BUILD_NO_C4D_EXPORTER",
                "ASSIMP_DOUBLE_PRECISION",
            ]
        );
    }
}
