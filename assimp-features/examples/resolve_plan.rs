//! Resolve a build plan and print what would be compiled.
//!
//! Usage: cargo run -p assimp-features --example resolve_plan -- "Obj,glTF"

use assimp_features::{BuildRequest, FormatCatalog, Platform, resolve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let formats = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());

    let catalog = FormatCatalog::builtin();
    let request = BuildRequest::new(Platform::host()).with_formats(&formats);
    let plan = resolve(&request, &catalog)?;

    println!("Target: {}", plan.platform);
    println!("Layout: {}", plan.layout.root.display());
    println!(
        "Formats ({}/{}): {}",
        plan.formats.len(),
        catalog.formats().len(),
        plan.formats.join(", ")
    );
    println!(
        "Sources: {} C++, {} C",
        plan.cpp_sources().count(),
        plan.c_sources().count()
    );
    for m in &plan.macros {
        println!("  {}", m.to_flag());
    }
    Ok(())
}
