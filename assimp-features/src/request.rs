//! User-facing build configuration
//!
//! A [`BuildRequest`] captures everything the resolver needs: which formats
//! to build, the numeric precision, the target platform and where artifacts
//! are installed.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Token that selects every buildable format
pub const ALL_FORMATS: &str = "all";

/// Which optional formats were asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSelection {
    /// Every catalog format
    All,
    /// An explicit list; may be empty and may contain duplicates
    List(Vec<String>),
}

impl FormatSelection {
    /// Parse the `formats` flag.
    ///
    /// `all` selects everything, anything else is split on commas. Empty
    /// tokens are dropped, so an empty string selects no optional format.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == ALL_FORMATS {
            return Self::All;
        }
        Self::List(
            raw.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Selection with no optional format
    pub fn none() -> Self {
        Self::List(Vec::new())
    }
}

impl Default for FormatSelection {
    fn default() -> Self {
        Self::none()
    }
}

/// Target platform as three opaque tags
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Platform {
    /// CPU architecture (e.g. `x86_64`)
    pub arch: String,
    /// Operating system (e.g. `linux`, `windows`, `macos`)
    pub os: String,
    /// ABI / environment (e.g. `gnu`, `msvc`, `none`)
    pub abi: String,
}

/// ABI tag used when the toolchain reports none
pub const NO_ABI: &str = "none";

/// Vendor components that can appear in a three-part triple
const TRIPLE_VENDORS: &[&str] = &[
    "unknown", "pc", "apple", "sun", "nvidia", "fortanix", "wrs", "uwp", "kmc", "sony",
    "nintendo", "espressif", "esp", "unikraft", "openwrt", "risc0", "win7",
];

impl Platform {
    /// Create a platform from its tags. An empty ABI becomes `none`.
    pub fn new(arch: impl Into<String>, os: impl Into<String>, abi: impl Into<String>) -> Self {
        let abi = abi.into();
        Self {
            arch: arch.into(),
            os: os.into(),
            abi: if abi.is_empty() { NO_ABI.to_string() } else { abi },
        }
    }

    /// The platform this binary was compiled for
    pub fn host() -> Self {
        let abi = if cfg!(target_env = "gnu") {
            "gnu"
        } else if cfg!(target_env = "msvc") {
            "msvc"
        } else if cfg!(target_env = "musl") {
            "musl"
        } else {
            NO_ABI
        };
        Self::new(std::env::consts::ARCH, std::env::consts::OS, abi)
    }

    /// Split a target triple such as `x86_64-unknown-linux-gnu`.
    ///
    /// Accepts `arch-vendor-os[-abi]`, vendor-less `arch-os-abi`
    /// (`thumbv7em-none-eabihf`, `aarch64-linux-android`) and `arch-os`
    /// (`wasm32-wasip1`). A three-component triple has a vendor only when its
    /// middle component is a known vendor. `darwin` is reported as `macos`,
    /// matching Cargo's `target_os`. A missing ABI becomes `none`.
    ///
    /// Returns `None` for a bare architecture, empty components or more than
    /// four components.
    pub fn from_triple(triple: &str) -> Option<Self> {
        let parts: Vec<&str> = triple.split('-').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        let (arch, os, abi) = match parts.as_slice() {
            [arch, os] => (*arch, *os, NO_ABI),
            [arch, vendor, os] if TRIPLE_VENDORS.contains(vendor) => (*arch, *os, NO_ABI),
            [arch, os, abi] => (*arch, *os, *abi),
            [arch, _vendor, os, abi] => (*arch, *os, *abi),
            _ => return None,
        };
        let os = match os {
            "darwin" => "macos",
            other => other,
        };
        Some(Self::new(arch, os, abi))
    }

    /// Check whether the OS tag is exactly `windows`
    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// Directory name for this target: `<arch>_<os>_<abi>`
    pub fn tag(&self) -> String {
        format!("{}_{}_{}", self.arch, self.os, self.abi)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Input to [`crate::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Requested formats
    pub formats: FormatSelection,
    /// Store scene data as `double` instead of `float`
    pub double_precision: bool,
    /// Target platform
    pub platform: Platform,
    /// Root under which the per-target directory is created
    pub install_prefix: PathBuf,
}

impl BuildRequest {
    /// Request with no optional format and single precision, installing under `out`
    pub fn new(platform: Platform) -> Self {
        Self {
            formats: FormatSelection::none(),
            double_precision: false,
            platform,
            install_prefix: PathBuf::from("out"),
        }
    }

    /// Set the format selection from the raw flag value
    pub fn with_formats(mut self, raw: &str) -> Self {
        self.formats = FormatSelection::parse(raw);
        self
    }

    /// Enable or disable double precision
    pub fn with_double_precision(mut self, enabled: bool) -> Self {
        self.double_precision = enabled;
        self
    }

    /// Set the install prefix
    pub fn with_install_prefix<P: AsRef<Path>>(mut self, prefix: P) -> Self {
        self.install_prefix = prefix.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!(FormatSelection::parse("all"), FormatSelection::All);
        assert_eq!(FormatSelection::parse(" all "), FormatSelection::All);
    }

    #[test]
    fn test_parse_list_drops_empty_tokens() {
        assert_eq!(
            FormatSelection::parse("STL,,Obj,"),
            FormatSelection::List(vec!["STL".into(), "Obj".into()])
        );
        assert_eq!(FormatSelection::parse(""), FormatSelection::none());
        assert_eq!(FormatSelection::parse(",,"), FormatSelection::none());
    }

    #[test]
    fn test_parse_keeps_case() {
        // `All` is a (non-existent) format name, not the sentinel.
        assert_eq!(
            FormatSelection::parse("All"),
            FormatSelection::List(vec!["All".into()])
        );
    }

    #[test]
    fn test_platform_tag() {
        let platform = Platform::new("x86_64", "linux", "gnu");
        assert_eq!(platform.tag(), "x86_64_linux_gnu");
        assert_eq!(Platform::new("aarch64", "macos", "").tag(), "aarch64_macos_none");
    }

    #[test]
    fn test_from_triple() {
        assert_eq!(
            Platform::from_triple("x86_64-unknown-linux-gnu"),
            Some(Platform::new("x86_64", "linux", "gnu"))
        );
        assert_eq!(
            Platform::from_triple("x86_64-pc-windows-msvc"),
            Some(Platform::new("x86_64", "windows", "msvc"))
        );
        assert_eq!(
            Platform::from_triple("aarch64-apple-darwin"),
            Some(Platform::new("aarch64", "macos", "none"))
        );
        assert_eq!(Platform::from_triple("wasm32"), None);
        assert_eq!(Platform::from_triple("x86_64--linux"), None);
        assert_eq!(Platform::from_triple("a-b-c-d-e"), None);
    }

    #[test]
    fn test_from_triple_without_vendor() {
        assert_eq!(
            Platform::from_triple("thumbv7em-none-eabihf"),
            Some(Platform::new("thumbv7em", "none", "eabihf"))
        );
        assert_eq!(
            Platform::from_triple("aarch64-linux-android"),
            Some(Platform::new("aarch64", "linux", "android"))
        );
        assert_eq!(
            Platform::from_triple("wasm32-wasip1"),
            Some(Platform::new("wasm32", "wasip1", "none"))
        );
        assert_eq!(
            Platform::from_triple("wasm32-unknown-emscripten"),
            Some(Platform::new("wasm32", "emscripten", "none"))
        );
        assert_eq!(
            Platform::from_triple("thumbv7em-none-eabihf").unwrap().tag(),
            "thumbv7em_none_eabihf"
        );
    }

    #[test]
    fn test_windows_detection_is_exact() {
        assert!(Platform::new("x86_64", "windows", "gnu").is_windows());
        assert!(!Platform::new("x86_64", "Windows", "gnu").is_windows());
        assert!(!Platform::new("x86_64", "linux", "gnu").is_windows());
    }
}
