use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use flate2::{Compression, write::GzEncoder};

use assimp_features::config_header::ASSIMP_VERSION;

/// Archive an installed layout root, adding a `manifest.txt`.
pub fn create(layout_root: &Path, out: &Path) -> Result<()> {
    let include_dir = layout_root.join("include");
    let lib_dir = layout_root.join("lib");
    if !include_dir.is_dir() || !lib_dir.is_dir() {
        bail!(
            "{} is not an installed layout (expected include/ and lib/); refusing to package",
            layout_root.display()
        );
    }

    let target = layout_root
        .file_name()
        .and_then(|s| s.to_str())
        .context("layout root has no directory name")?
        .to_string();

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tar_file =
        fs::File::create(out).with_context(|| format!("failed to create {}", out.display()))?;
    let mut archive = tar::Builder::new(GzEncoder::new(tar_file, Compression::best()));

    for sub in ["include", "lib", "bin"] {
        let dir = layout_root.join(sub);
        if dir.is_dir() {
            append_dir_all_files(&mut archive, &dir, PathBuf::from(sub))?;
        }
    }
    append_manifest(&mut archive, &target)?;

    archive.into_inner()?.finish()?;
    Ok(())
}

fn append_manifest(archive: &mut tar::Builder<GzEncoder<fs::File>>, target: &str) -> Result<()> {
    let (major, minor, patch) = ASSIMP_VERSION;
    let mut body = String::new();
    body.push_str("crate=assimp-features\n");
    body.push_str(&format!("crate_version={}\n", assimp_features::VERSION));
    body.push_str(&format!("assimp_version={major}.{minor}.{patch}\n"));
    body.push_str(&format!("target={target}\n"));

    let bytes = body.into_bytes();
    let mut header = tar::Header::new_gnu();
    header.set_mode(0o644);
    header.set_size(bytes.len() as u64);
    header.set_cksum();
    archive.append_data(&mut header, "manifest.txt", Cursor::new(bytes))?;
    Ok(())
}

fn append_dir_all_files(
    archive: &mut tar::Builder<GzEncoder<fs::File>>,
    src: &Path,
    dst: PathBuf,
) -> Result<()> {
    for entry in fs::read_dir(src)?.flatten() {
        let p = entry.path();
        let dst_path = dst.join(entry.file_name());
        if p.is_dir() {
            append_dir_all_files(archive, &p, dst_path)?;
        } else {
            archive.append_path_with_name(&p, &dst_path)?;
        }
    }
    Ok(())
}
