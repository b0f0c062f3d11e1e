//! Static registry of Assimp formats and the source files behind them
//!
//! A [`FormatCatalog`] maps each format name to the ordered list of source
//! files that implement its importer and exporter, alongside the sources that
//! are always compiled (the core library and the bundled support libraries).
//! The built-in catalog describes the vendored Assimp checkout; a JSON
//! document with the same shape can replace it.

mod data;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::macros;

/// One catalogued format and its sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatEntry {
    /// Case-sensitive format name (e.g. `Obj`, `glTF`)
    pub name: String,
    /// Source files relative to the checkout root, in compile order
    pub files: Vec<String>,
}

/// A license file that ships next to the built library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseEntry {
    /// Path of the license inside the checkout
    pub source: String,
    /// File name it is installed under in the `lib` directory
    pub installed_as: String,
}

/// Registry of known formats, always-compiled sources and support libraries
///
/// JSON documents with unknown keys are rejected, so a misspelled
/// `unsupported` cannot silently enable a format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatCatalog {
    #[serde(default)]
    common: Vec<String>,
    #[serde(default)]
    support_libraries: BTreeMap<String, Vec<String>>,
    formats: Vec<FormatEntry>,
    #[serde(default)]
    unsupported: BTreeSet<String>,
    #[serde(default)]
    include_dirs: Vec<String>,
    #[serde(default)]
    licenses: Vec<LicenseEntry>,
}

fn owned(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

impl FormatCatalog {
    /// Catalog of the vendored Assimp source tree
    pub fn builtin() -> Self {
        Self {
            common: owned(data::COMMON_SOURCES),
            support_libraries: data::SUPPORT_LIBRARIES
                .iter()
                .map(|(name, files)| (name.to_string(), owned(files)))
                .collect(),
            formats: data::FORMATS
                .iter()
                .map(|(name, files)| FormatEntry {
                    name: name.to_string(),
                    files: owned(files),
                })
                .collect(),
            unsupported: data::UNSUPPORTED_FORMATS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include_dirs: owned(data::INCLUDE_DIRS),
            licenses: data::LICENSES
                .iter()
                .map(|(source, installed_as)| LicenseEntry {
                    source: source.to_string(),
                    installed_as: installed_as.to_string(),
                })
                .collect(),
        }
    }

    /// Build a catalog from its parts and validate it
    pub fn new(
        common: Vec<String>,
        support_libraries: BTreeMap<String, Vec<String>>,
        formats: Vec<FormatEntry>,
        unsupported: BTreeSet<String>,
    ) -> Result<Self> {
        let catalog = Self {
            common,
            support_libraries,
            formats,
            unsupported,
            include_dirs: Vec::new(),
            licenses: Vec::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(text: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a JSON catalog from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&text)
    }

    /// Serialize the catalog as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the structural rules every catalog must satisfy
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut symbols = HashSet::new();
        for entry in &self.formats {
            if entry.name.is_empty() {
                return Err(Error::invalid_catalog("format with an empty name"));
            }
            if entry.name.contains(',') {
                return Err(Error::invalid_catalog(format!(
                    "format name `{}` contains a comma",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::invalid_catalog(format!(
                    "format `{}` is listed twice",
                    entry.name
                )));
            }
            if !symbols.insert(macros::symbol_name(&entry.name)) {
                return Err(Error::invalid_catalog(format!(
                    "format `{}` shares its disable switches with another format",
                    entry.name
                )));
            }
            if entry.files.is_empty() {
                return Err(Error::invalid_catalog(format!(
                    "format `{}` has no source files",
                    entry.name
                )));
            }
        }

        // Unsupported names must still map to a disable-macro pair.
        if let Some(name) = self.unsupported.iter().find(|n| !seen.contains(n.as_str())) {
            return Err(Error::invalid_catalog(format!(
                "unsupported format `{name}` is not a catalog entry"
            )));
        }

        Ok(())
    }

    /// Format names in catalog order
    pub fn format_names(&self) -> impl Iterator<Item = &str> {
        self.formats.iter().map(|f| f.name.as_str())
    }

    /// Format names sorted, as used for diagnostics
    pub fn sorted_format_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.format_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// All format entries in catalog order
    pub fn formats(&self) -> &[FormatEntry] {
        &self.formats
    }

    /// Check whether a format name exists (exact, case-sensitive match)
    pub fn contains(&self, name: &str) -> bool {
        self.formats.iter().any(|f| f.name == name)
    }

    /// Source files of one format
    pub fn files(&self, name: &str) -> Option<&[String]> {
        self.formats
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.files.as_slice())
    }

    /// Check whether a format is catalogued but never built
    pub fn is_unsupported(&self, name: &str) -> bool {
        self.unsupported.contains(name)
    }

    /// Formats that are never built
    pub fn unsupported(&self) -> &BTreeSet<String> {
        &self.unsupported
    }

    /// Sources compiled into every build
    pub fn common_sources(&self) -> &[String] {
        &self.common
    }

    /// Bundled helper libraries, keyed by name
    pub fn support_libraries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.support_libraries
    }

    /// Compiler include directories relative to the checkout
    pub fn include_dirs(&self) -> &[String] {
        &self.include_dirs
    }

    /// License files shipped with the built library
    pub fn licenses(&self) -> &[LicenseEntry] {
        &self.licenses
    }
}

impl Default for FormatCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = FormatCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert!(catalog.contains("Obj"));
        assert!(catalog.contains("glTF"));
        assert!(!catalog.contains("obj"), "lookup is case-sensitive");
    }

    #[test]
    fn test_builtin_unsupported_are_catalogued() {
        let catalog = FormatCatalog::builtin();
        for name in catalog.unsupported() {
            assert!(catalog.contains(name), "{name} should be a catalog entry");
        }
        assert!(catalog.is_unsupported("C4D"));
    }

    #[test]
    fn test_sorted_names() {
        let catalog = FormatCatalog::builtin();
        let names = catalog.sorted_format_names();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
        assert_eq!(names.len(), catalog.formats().len());
    }

    #[test]
    fn test_rejects_empty_format() {
        let result = FormatCatalog::new(
            Vec::new(),
            BTreeMap::new(),
            vec![FormatEntry {
                name: "STL".into(),
                files: Vec::new(),
            }],
            BTreeSet::new(),
        );
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn test_rejects_duplicate_format() {
        let entry = FormatEntry {
            name: "STL".into(),
            files: vec!["stl.cpp".into()],
        };
        let result = FormatCatalog::new(
            Vec::new(),
            BTreeMap::new(),
            vec![entry.clone(), entry],
            BTreeSet::new(),
        );
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn test_rejects_names_differing_only_in_case() {
        let result = FormatCatalog::new(
            Vec::new(),
            BTreeMap::new(),
            vec![
                FormatEntry {
                    name: "Obj".into(),
                    files: vec!["obj.cpp".into()],
                },
                FormatEntry {
                    name: "OBJ".into(),
                    files: vec!["obj2.cpp".into()],
                },
            ],
            BTreeSet::new(),
        );
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn test_rejects_dangling_unsupported() {
        let result = FormatCatalog::new(
            Vec::new(),
            BTreeMap::new(),
            vec![FormatEntry {
                name: "STL".into(),
                files: vec!["stl.cpp".into()],
            }],
            BTreeSet::from(["C4D".to_string()]),
        );
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let catalog = FormatCatalog::builtin();
        let json = catalog.to_json().unwrap();
        let parsed = FormatCatalog::from_json(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_json_minimal_document() {
        let catalog = FormatCatalog::from_json(
            r#"{ "formats": [ { "name": "STL", "files": ["code/stl.cpp"] } ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.format_names().collect::<Vec<_>>(), ["STL"]);
        assert!(catalog.common_sources().is_empty());
        assert!(catalog.unsupported().is_empty());
    }

    #[test]
    fn test_json_rejects_unknown_keys() {
        let result = FormatCatalog::from_json(
            r#"{
                "formats": [
                    { "name": "Tiny", "files": ["t.cpp"] },
                    { "name": "Bad", "files": ["bad.cpp"] }
                ],
                "unsuported": ["Bad"]
            }"#,
        );
        match result {
            Err(Error::CatalogParse(e)) => assert!(e.to_string().contains("unsuported")),
            other => panic!("expected a parse error, got {other:?}"),
        }

        let result = FormatCatalog::from_json(
            r#"{ "formats": [ { "name": "STL", "file": ["stl.cpp"] } ] }"#,
        );
        assert!(matches!(result, Err(Error::CatalogParse(_))));

        let result = FormatCatalog::from_json(
            r#"{
                "formats": [ { "name": "STL", "files": ["stl.cpp"] } ],
                "licenses": [ { "source": "LICENSE", "installed_as": "LICENSE", "renamed": true } ]
            }"#,
        );
        assert!(matches!(result, Err(Error::CatalogParse(_))));
    }

    #[test]
    fn test_json_malformed() {
        let result = FormatCatalog::from_json("{ not json");
        assert!(matches!(result, Err(Error::CatalogParse(_))));
    }
}
