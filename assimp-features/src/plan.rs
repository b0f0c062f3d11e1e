//! Output of feature resolution

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::macros::Macro;
use crate::request::Platform;

/// Per-target install directories: `<prefix>/<arch>_<os>_<abi>/{lib,include,bin}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallLayout {
    /// `<prefix>/<arch>_<os>_<abi>`
    pub root: PathBuf,
    /// Static library and license inventory
    pub lib: PathBuf,
    /// Installed public headers
    pub include: PathBuf,
    /// Executables
    pub bin: PathBuf,
}

impl InstallLayout {
    /// Layout for `platform` under `prefix`
    pub fn new(prefix: &Path, platform: &Platform) -> Self {
        let root = prefix.join(platform.tag());
        Self {
            lib: root.join("lib"),
            include: root.join("include"),
            bin: root.join("bin"),
            root,
        }
    }

    /// Create the three subdirectories
    pub fn create_dirs(&self) -> Result<()> {
        for dir in [&self.lib, &self.include, &self.bin] {
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        Ok(())
    }
}

/// Everything the compilation step needs, fully resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPlan {
    /// Target the plan was resolved for
    pub platform: Platform,
    /// Selected formats, in catalog order
    pub formats: Vec<String>,
    /// Formats compiled out (including unsupported ones), in catalog order
    pub disabled_formats: Vec<String>,
    /// Source files relative to the checkout, without duplicates
    pub sources: Vec<String>,
    /// Include directories relative to the checkout
    pub include_dirs: Vec<String>,
    /// Preprocessor definitions
    pub macros: Vec<Macro>,
    /// Whether the generated config header enables double precision
    pub double_precision: bool,
    /// Where artifacts are installed
    pub layout: InstallLayout,
}

impl ResolvedPlan {
    /// Check whether a format made it into the build
    pub fn is_selected(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }

    /// Check whether a symbol is defined, regardless of its value
    pub fn defines(&self, name: &str) -> bool {
        self.macros.iter().any(|m| m.name == name)
    }

    /// C translation units (compiled with the C compiler)
    pub fn c_sources(&self) -> impl Iterator<Item = &str> {
        self.sources
            .iter()
            .map(String::as_str)
            .filter(|s| is_c_source(s))
    }

    /// C++ translation units
    pub fn cpp_sources(&self) -> impl Iterator<Item = &str> {
        self.sources
            .iter()
            .map(String::as_str)
            .filter(|s| !is_c_source(s))
    }

    /// Source paths joined onto a checkout root
    pub fn source_paths<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.sources.iter().map(move |s| root.join(s))
    }

    /// Serialize the plan as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn is_c_source(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "c")
}
