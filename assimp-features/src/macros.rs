//! Preprocessor definitions handed to the C/C++ compiler

use serde::Serialize;

/// Defined when scene data is stored in double precision
pub const DOUBLE_PRECISION: &str = "ASSIMP_DOUBLE_PRECISION";

/// A single `-D` definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Macro {
    /// Symbol name
    pub name: String,
    /// Optional value; `None` defines the symbol without one
    pub value: Option<String>,
}

impl Macro {
    /// Define a symbol without a value
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Define a symbol with a value
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Command line form, e.g. `-DNAME` or `-DNAME=1`
    pub fn to_flag(&self) -> String {
        match &self.value {
            Some(value) => format!("-D{}={}", self.name, value),
            None => format!("-D{}", self.name),
        }
    }
}

impl std::fmt::Display for Macro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// Upper-case a format name the way the disable switches expect.
///
/// Only ASCII letters change; digits and punctuation are kept as-is.
pub fn symbol_name(format: &str) -> String {
    format.to_ascii_uppercase()
}

/// `ASSIMP_BUILD_NO_<F>_IMPORTER`
pub fn importer_disable(format: &str) -> String {
    format!("ASSIMP_BUILD_NO_{}_IMPORTER", symbol_name(format))
}

/// `ASSIMP_BUILD_NO_<F>_EXPORTER`
pub fn exporter_disable(format: &str) -> String {
    format!("ASSIMP_BUILD_NO_{}_EXPORTER", symbol_name(format))
}

/// Both switches that compile a format out
pub fn disable_pair(format: &str) -> [Macro; 2] {
    [
        Macro::flag(importer_disable(format)),
        Macro::flag(exporter_disable(format)),
    ]
}

/// Definitions required when targeting Windows
pub fn windows_macros() -> [Macro; 4] {
    [
        Macro::flag("_WINDOWS"),
        Macro::flag("_WIN32"),
        // Spelled the way the bundled OpenDDL parser checks for it.
        Macro::flag("OPENDDL_STATIC_LIBARY"),
        Macro::with_value("ASSIMP_IMPORTER_GLTF_USE_OPEN3DGC", "1"),
    ]
}

/// Definitions every build of the bundled sources needs
pub fn baseline_macros() -> [Macro; 3] {
    [
        Macro::with_value("RAPIDJSON_HAS_STDSTRING", "1"),
        Macro::flag("RAPIDJSON_NOMEMBERITERATORCLASS"),
        Macro::flag("OPENDDLPARSER_BUILD"),
    ]
}
