pub mod config;
pub mod plan;
pub mod util;

#[cfg(feature = "build-assimp")]
pub mod compile;

#[cfg(feature = "build-assimp")]
pub mod install;

#[cfg(feature = "build-assimp")]
pub mod system_deps;
