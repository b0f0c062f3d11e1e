use crate::build_support::config::BuildConfig;

/// Link the C++ runtime and platform libraries the static Assimp build needs.
pub fn emit(cfg: &BuildConfig) {
    if cfg.is_windows() {
        if cfg.is_msvc() {
            // MSVC links its C++ runtime implicitly.
            println!("cargo:rustc-link-lib=advapi32");
        } else {
            // MinGW
            println!("cargo:rustc-link-lib=stdc++");
        }
        return;
    }

    if cfg.is_macos() || cfg.target_os == "ios" {
        println!("cargo:rustc-link-lib=c++");
        return;
    }

    if cfg.target_os == "android" {
        println!("cargo:rustc-link-lib=c++_shared");
        return;
    }

    // Linux/BSD
    println!("cargo:rustc-link-lib=stdc++");
}
