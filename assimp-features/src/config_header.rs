//! Generated headers (`assimp/config.h`, `revision.h`)
//!
//! `config.h` is public and installed; `revision.h` is private to the
//! Assimp sources and only lands in a build-local include directory.
//!
//! The Assimp checkout only ships `*.in` templates written for CMake's
//! `configure_file`. This module renders them without CMake: `#cmakedefine`,
//! `#cmakedefine01`, `${VAR}` and `@VAR@` are supported.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::macros::DOUBLE_PRECISION;
use crate::plan::ResolvedPlan;

/// Assimp release the built-in catalog describes
pub const ASSIMP_VERSION: (u32, u32, u32) = (6, 0, 3);

/// `config.h` template, relative to the checkout
pub const CONFIG_TEMPLATE: &str = "include/assimp/config.h.in";

/// `revision.h` template, relative to the checkout
pub const REVISION_TEMPLATE: &str = "code/Common/revision.h.in";

/// Variables available to the templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValues {
    vars: BTreeMap<String, String>,
}

impl ConfigValues {
    /// Empty variable set
    pub fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Values for a resolved plan
    pub fn for_plan(plan: &ResolvedPlan) -> Self {
        let (major, minor, patch) = ASSIMP_VERSION;
        let mut values = Self::new();
        values
            .set(
                DOUBLE_PRECISION,
                if plan.double_precision { "ON" } else { "OFF" },
            )
            .set("ASSIMP_VERSION_MAJOR", major.to_string())
            .set("ASSIMP_VERSION_MINOR", minor.to_string())
            .set("ASSIMP_VERSION_PATCH", patch.to_string())
            .set("ASSIMP_PACKAGE_VERSION", "0")
            .set("GIT_COMMIT_HASH", "0")
            .set("GIT_BRANCH", "")
            .set("CMAKE_SHARED_LIBRARY_PREFIX", "")
            .set("LIBRARY_SUFFIX", format!("-{major}"));
        values
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Look up a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// CMake truthiness: unset, empty, `0`, `OFF`, `NO`, `FALSE`, `N`,
    /// `IGNORE`, `NOTFOUND` and `*-NOTFOUND` are false
    pub fn is_true(&self, name: &str) -> bool {
        let Some(value) = self.get(name) else {
            return false;
        };
        let upper = value.trim().to_ascii_uppercase();
        !(upper.is_empty()
            || matches!(
                upper.as_str(),
                "0" | "OFF" | "NO" | "FALSE" | "N" | "IGNORE" | "NOTFOUND"
            )
            || upper.ends_with("-NOTFOUND"))
    }
}

impl Default for ConfigValues {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a `configure_file` template
pub fn render_cmake_template(template: &str, values: &ConfigValues) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    for (index, line) in template.lines().enumerate() {
        let trimmed = line.trim_start();
        let rendered = if let Some(rest) = trimmed.strip_prefix("#cmakedefine01") {
            let name = directive_name(rest, index)?;
            let bit = if values.is_true(name) { 1 } else { 0 };
            format!("#define {name} {bit}")
        } else if let Some(rest) = trimmed.strip_prefix("#cmakedefine") {
            let name = directive_name(rest, index)?;
            if values.is_true(name) {
                let tail = rest.trim_start()[name.len()..].trim();
                if tail.is_empty() {
                    format!("#define {name}")
                } else {
                    format!("#define {name} {}", substitute(tail, values))
                }
            } else {
                format!("/* #undef {name} */")
            }
        } else {
            substitute(line, values)
        };
        out.push_str(&rendered);
        out.push('\n');
    }
    Ok(out)
}

fn directive_name(rest: &str, index: usize) -> Result<&str> {
    rest.split_whitespace()
        .next()
        .ok_or_else(|| Error::template(format!("line {}: directive without a name", index + 1)))
}

fn substitute(line: &str, values: &ConfigValues) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        let dollar = rest.find("${");
        let at = rest.find('@');
        let next = match (dollar, at) {
            (Some(d), Some(a)) => Some(d.min(a)),
            (d, a) => d.or(a),
        };
        let Some(start) = next else {
            out.push_str(rest);
            return out;
        };

        out.push_str(&rest[..start]);
        let (open, close) = if rest[start..].starts_with("${") {
            ("${", '}')
        } else {
            ("@", '@')
        };
        let after = &rest[start + open.len()..];
        match after.find(close) {
            Some(end) if is_variable_name(&after[..end]) => {
                out.push_str(values.get(&after[..end]).unwrap_or(""));
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str(open);
                rest = after;
            }
        }
    }
}

fn is_variable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

/// Render `assimp/config.h`
pub fn render_config_h(template: &str, plan: &ResolvedPlan) -> Result<String> {
    render_cmake_template(template, &ConfigValues::for_plan(plan))
}

/// Render `revision.h`
pub fn render_revision_h(template: &str, values: &ConfigValues) -> Result<String> {
    render_cmake_template(template, values)
}

/// Render the public `config.h` into `<include_dir>/assimp/config.h`.
///
/// This header is installed with the other public headers.
pub fn write_config_h(
    source_root: &Path,
    include_dir: &Path,
    plan: &ResolvedPlan,
) -> Result<PathBuf> {
    let template = read_template(source_root, CONFIG_TEMPLATE)?;
    let rendered = render_config_h(&template, plan)?;
    write_header(&include_dir.join("assimp").join("config.h"), &rendered)
}

/// Render the private `revision.h` into `<private_dir>/revision.h`.
///
/// Only the Assimp sources include it, so `private_dir` must be a
/// build-local include directory, never the installed `include`.
pub fn write_revision_h(
    source_root: &Path,
    private_dir: &Path,
    plan: &ResolvedPlan,
) -> Result<PathBuf> {
    let template = read_template(source_root, REVISION_TEMPLATE)?;
    let rendered = render_revision_h(&template, &ConfigValues::for_plan(plan))?;
    write_header(&private_dir.join("revision.h"), &rendered)
}

fn read_template(source_root: &Path, relative: &str) -> Result<String> {
    let src = source_root.join(relative);
    if !src.is_file() {
        return Err(Error::missing_source(src));
    }
    std::fs::read_to_string(&src).map_err(|e| Error::io(&src, e))
}

fn write_header(dst: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(dst, contents).map_err(|e| Error::io(dst, e))?;
    log::debug!("generated {}", dst.display());
    Ok(dst.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> ConfigValues {
        let mut v = ConfigValues::new();
        for (k, val) in pairs {
            v.set(*k, *val);
        }
        v
    }

    #[test]
    fn test_cmakedefine_enabled() {
        let out = render_cmake_template(
            "#cmakedefine ASSIMP_DOUBLE_PRECISION 1",
            &values(&[("ASSIMP_DOUBLE_PRECISION", "ON")]),
        )
        .unwrap();
        assert_eq!(out, "#define ASSIMP_DOUBLE_PRECISION 1\n");
    }

    #[test]
    fn test_cmakedefine_disabled() {
        let out = render_cmake_template(
            "#cmakedefine ASSIMP_DOUBLE_PRECISION 1",
            &values(&[("ASSIMP_DOUBLE_PRECISION", "OFF")]),
        )
        .unwrap();
        assert_eq!(out, "/* #undef ASSIMP_DOUBLE_PRECISION */\n");
    }

    #[test]
    fn test_cmakedefine01() {
        let out = render_cmake_template(
            "#cmakedefine01 HAS_X\n#cmakedefine01 HAS_Y",
            &values(&[("HAS_X", "true")]),
        )
        .unwrap();
        assert_eq!(out, "#define HAS_X 1\n#define HAS_Y 0\n");
    }

    #[test]
    fn test_variable_substitution() {
        let out = render_cmake_template(
            "#define VER_MAJOR @MAJOR@\n#define BRANCH \"${BRANCH}\"\nuser@example.com",
            &values(&[("MAJOR", "6"), ("BRANCH", "master")]),
        )
        .unwrap();
        assert_eq!(
            out,
            "#define VER_MAJOR 6\n#define BRANCH \"master\"\nuser@example.com\n"
        );
    }

    #[test]
    fn test_unknown_variable_renders_empty() {
        let out = render_cmake_template("x=@MISSING@;", &ConfigValues::new()).unwrap();
        assert_eq!(out, "x=;\n");
    }

    #[test]
    fn test_directive_without_name() {
        let err = render_cmake_template("ok\n#cmakedefine", &ConfigValues::new()).unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    fn plan(double_precision: bool) -> ResolvedPlan {
        let request = crate::BuildRequest::new(crate::Platform::new("x86_64", "linux", "gnu"))
            .with_double_precision(double_precision);
        crate::resolve(&request, &crate::FormatCatalog::builtin()).unwrap()
    }

    #[test]
    fn test_render_config_h_follows_plan_precision() {
        let template = "#cmakedefine ASSIMP_DOUBLE_PRECISION 1";
        assert_eq!(
            render_config_h(template, &plan(true)).unwrap(),
            "#define ASSIMP_DOUBLE_PRECISION 1\n"
        );
        assert_eq!(
            render_config_h(template, &plan(false)).unwrap(),
            "/* #undef ASSIMP_DOUBLE_PRECISION */\n"
        );
    }

    #[test]
    fn test_render_revision_h() {
        let out = render_revision_h(
            "#define VER_MAJOR @ASSIMP_VERSION_MAJOR@\n#define GitVersion 0x@GIT_COMMIT_HASH@",
            &ConfigValues::for_plan(&plan(false)),
        )
        .unwrap();
        assert_eq!(out, "#define VER_MAJOR 6\n#define GitVersion 0x0\n");
    }

    #[test]
    fn test_truthiness() {
        let v = values(&[
            ("A", "ON"),
            ("B", "off"),
            ("C", "LIB-NOTFOUND"),
            ("D", "1"),
            ("E", ""),
        ]);
        assert!(v.is_true("A"));
        assert!(!v.is_true("B"));
        assert!(!v.is_true("C"));
        assert!(v.is_true("D"));
        assert!(!v.is_true("E"));
        assert!(!v.is_true("UNSET"));
    }
}
