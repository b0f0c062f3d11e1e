//! `assimp-plan` command line behavior

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn assimp_plan() -> Command {
    Command::cargo_bin("assimp-plan").unwrap()
}

#[test]
fn test_resolve_prints_layout_and_macros() {
    assimp_plan()
        .args([
            "resolve",
            "--formats",
            "Obj",
            "--target",
            "x86_64-unknown-linux-gnu",
            "--prefix",
            "/tmp/assimp-out",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("x86_64_linux_gnu"))
        .stdout(predicate::str::contains("-DASSIMP_BUILD_NO_FBX_IMPORTER"))
        .stdout(predicate::str::contains("-DASSIMP_BUILD_NO_OBJ_IMPORTER").not())
        .stdout(predicate::str::contains("code/AssetLib/Obj/ObjFileParser.cpp"));
}

#[test]
fn test_resolve_json() {
    let output = assimp_plan()
        .args([
            "resolve",
            "--formats",
            "STL,STL",
            "--double",
            "--arch",
            "aarch64",
            "--os",
            "windows",
            "--abi",
            "msvc",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["formats"], serde_json::json!(["STL"]));
    assert_eq!(plan["double_precision"], Value::Bool(true));
    assert_eq!(plan["platform"]["os"], "windows");

    let macros: Vec<&str> = plan["macros"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["name"].as_str())
        .collect();
    assert!(macros.contains(&"_WIN32"));
    assert!(macros.contains(&"ASSIMP_DOUBLE_PRECISION"));
}

#[test]
fn test_unknown_format_lists_valid_names() {
    assimp_plan()
        .args(["resolve", "--formats", "NotAFormat"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format `NotAFormat`"))
        .stderr(predicate::str::contains("valid formats:"))
        .stderr(predicate::str::contains("  glTF"));
}

#[test]
fn test_formats_marks_unsupported() {
    assimp_plan()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("C4D (unsupported)"))
        .stdout(predicate::str::contains("Obj\n"));
}

#[test]
fn test_invalid_target_triple() {
    assimp_plan()
        .args(["resolve", "--target", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target triple"));
}

#[test]
fn test_vendorless_targets() {
    assimp_plan()
        .args(["resolve", "--target", "thumbv7em-none-eabihf", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("thumbv7em_none_eabihf"));

    assimp_plan()
        .args(["resolve", "--target", "wasm32-wasip1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wasm32_wasip1_none"));
}

#[test]
fn test_catalog_with_misspelled_key_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{
            "formats": [
                { "name": "Tiny", "files": ["t.cpp"] },
                { "name": "Bad", "files": ["bad.cpp"] }
            ],
            "unsuported": ["Bad"]
        }"#,
    )
    .unwrap();

    assimp_plan()
        .args(["resolve", "--formats", "all", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stdout(predicate::str::contains("bad.cpp").not())
        .stderr(predicate::str::contains("unsuported"));
}

#[cfg(feature = "package")]
#[test]
fn test_package_installed_layout() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("x86_64_linux_gnu");
    std::fs::create_dir_all(root.join("include/assimp")).unwrap();
    std::fs::create_dir_all(root.join("lib")).unwrap();
    std::fs::write(root.join("include/assimp/scene.h"), "// scene").unwrap();
    std::fs::write(root.join("lib/LICENSE"), "license").unwrap();
    let archive = dir.path().join("dist/assimp.tar.gz");

    assimp_plan()
        .args(["package", "--dir"])
        .arg(&root)
        .arg("--out")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Package created at"));

    assert!(std::fs::metadata(&archive).unwrap().len() > 0);
}

#[cfg(feature = "package")]
#[test]
fn test_package_rejects_non_layout() {
    let dir = tempfile::TempDir::new().unwrap();
    assimp_plan()
        .args(["package", "--dir"])
        .arg(dir.path())
        .arg("--out")
        .arg(dir.path().join("out.tar.gz"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an installed layout"));
}
