//! Install step: public headers, generated `config.h`, static libraries and
//! license inventory
//!
//! Everything lands in the per-target [`InstallLayout`] of a resolved plan.
//! Compiler intermediates never do: libraries are staged from a separate
//! build directory by [`install_libraries`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::FormatCatalog;
use crate::config_header;
use crate::error::{Error, Result};
use crate::plan::{InstallLayout, ResolvedPlan};
use crate::request::Platform;

/// Extensions of the header files that are installed
pub const HEADER_EXTENSIONS: &[&str] = &["h", "inl", "hpp"];

/// Summary of what [`install`] copied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Header paths relative to the layout's `include` directory
    pub headers: Vec<PathBuf>,
    /// Generated public headers (absolute paths)
    pub generated: Vec<PathBuf>,
    /// License files written to `lib` (absolute paths)
    pub licenses: Vec<PathBuf>,
}

fn is_header(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext))
}

/// Copy every header below `include_dir` into `layout.include`, preserving
/// relative paths. Returns the relative paths, sorted.
pub fn install_headers(include_dir: &Path, layout: &InstallLayout) -> Result<Vec<PathBuf>> {
    if !include_dir.is_dir() {
        return Err(Error::missing_source(include_dir));
    }

    let mut installed = Vec::new();
    copy_headers(include_dir, Path::new(""), &layout.include, &mut installed)?;
    installed.sort();
    log::debug!(
        "installed {} header(s) into {}",
        installed.len(),
        layout.include.display()
    );
    Ok(installed)
}

fn copy_headers(
    src: &Path,
    relative: &Path,
    dst_root: &Path,
    installed: &mut Vec<PathBuf>,
) -> Result<()> {
    let read = fs::read_dir(src).map_err(|e| Error::io(src, e))?;
    for entry in read {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let p = entry.path();
        let rel = relative.join(entry.file_name());
        if p.is_dir() {
            copy_headers(&p, &rel, dst_root, installed)?;
            continue;
        }
        if !is_header(&p) {
            continue;
        }

        let dst = dst_root.join(&rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::copy(&p, &dst).map_err(|e| Error::io(&p, e))?;
        installed.push(rel);
    }
    Ok(())
}

/// Copy the catalog's license inventory into `layout.lib` under fixed names
pub fn install_licenses(
    source_root: &Path,
    layout: &InstallLayout,
    catalog: &FormatCatalog,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&layout.lib).map_err(|e| Error::io(&layout.lib, e))?;

    let mut written = Vec::with_capacity(catalog.licenses().len());
    for license in catalog.licenses() {
        let src = source_root.join(&license.source);
        if !src.is_file() {
            return Err(Error::missing_source(src));
        }
        let dst = layout.lib.join(&license.installed_as);
        fs::copy(&src, &dst).map_err(|e| Error::io(&src, e))?;
        written.push(dst);
    }
    Ok(written)
}

/// File name of a static library on `platform` (`assimp.lib` for MSVC,
/// `libassimp.a` elsewhere)
pub fn static_library_file_name(platform: &Platform, name: &str) -> String {
    if platform.abi == "msvc" {
        format!("{name}.lib")
    } else {
        format!("lib{name}.a")
    }
}

/// Copy the named static libraries from `build_dir` into `layout.lib`.
///
/// Only the archives are copied; object files and other compiler
/// byproducts in `build_dir` stay behind. A missing archive is an
/// [`Error::MissingSource`].
pub fn install_libraries(
    build_dir: &Path,
    plan: &ResolvedPlan,
    names: &[&str],
) -> Result<Vec<PathBuf>> {
    let lib_dir = &plan.layout.lib;
    fs::create_dir_all(lib_dir).map_err(|e| Error::io(lib_dir, e))?;

    let mut written = Vec::with_capacity(names.len());
    for name in names {
        let file_name = static_library_file_name(&plan.platform, name);
        let src = build_dir.join(&file_name);
        if !src.is_file() {
            return Err(Error::missing_source(src));
        }
        let dst = lib_dir.join(&file_name);
        fs::copy(&src, &dst).map_err(|e| Error::io(&src, e))?;
        written.push(dst);
    }
    log::debug!(
        "installed {} static libraries into {}",
        written.len(),
        lib_dir.display()
    );
    Ok(written)
}

/// Create the layout and install headers, the generated `config.h` and
/// licenses
pub fn install(
    source_root: &Path,
    plan: &ResolvedPlan,
    catalog: &FormatCatalog,
) -> Result<InstallReport> {
    plan.layout.create_dirs()?;

    let headers = install_headers(&source_root.join("include"), &plan.layout)?;
    let generated = vec![config_header::write_config_h(
        source_root,
        &plan.layout.include,
        plan,
    )?];
    let licenses = install_licenses(source_root, &plan.layout, catalog)?;

    log::info!(
        "installed {} header(s) and {} license file(s) into {}",
        headers.len(),
        licenses.len(),
        plan.layout.root.display()
    );

    Ok(InstallReport {
        headers,
        generated,
        licenses,
    })
}
