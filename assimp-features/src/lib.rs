//! # Assimp Features
//!
//! Feature resolution for building the Assimp 3D asset import library from
//! source.
//!
//! Given the formats a user wants (or `all`), the numeric precision and the
//! target platform, this crate computes everything a compilation step needs:
//!
//! - **Sources**: the core library, every bundled support library and the
//!   files of each selected format, without duplicates
//! - **Macros**: `ASSIMP_BUILD_NO_<F>_IMPORTER` / `_EXPORTER` for every format
//!   that is compiled out, plus precision and platform switches
//! - **Layout**: `<prefix>/<arch>_<os>_<abi>/{lib,include,bin}`
//!
//! ## Quick Start
//!
//! ```rust
//! use assimp_features::{BuildRequest, FormatCatalog, Platform, resolve};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = FormatCatalog::builtin();
//! let request = BuildRequest::new(Platform::new("x86_64", "linux", "gnu"))
//!     .with_formats("Obj,glTF")
//!     .with_install_prefix("out");
//!
//! let plan = resolve(&request, &catalog)?;
//! assert!(plan.is_selected("Obj"));
//! assert!(plan.defines("ASSIMP_BUILD_NO_FBX_IMPORTER"));
//! # Ok(())
//! # }
//! ```
//!
//! The resolver itself performs no I/O. The [`install`] and [`config_header`]
//! modules carry out the filesystem side of a plan: copying headers,
//! rendering `config.h` and shipping license files.

#![warn(missing_docs)]

pub mod catalog;
pub mod config_header;
pub mod error;
pub mod install;
pub mod macros;
pub mod plan;
pub mod request;
pub mod resolver;

// Re-export common types for convenience
pub use crate::{
    catalog::{FormatCatalog, FormatEntry, LicenseEntry},
    error::{Error, Result},
    macros::Macro,
    plan::{InstallLayout, ResolvedPlan},
    request::{BuildRequest, FormatSelection, Platform},
    resolver::resolve,
};

/// Version information for this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
