use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the workspace `config.toml` next to the compiled binary so
/// `shared::config::load_config` finds it without extra flags.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let Some(target_dir) = target_profile_dir() else {
        println!("cargo:warning=could not locate target profile directory, config.toml not copied");
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found at {:?}, embedded defaults will be used", source);
        return;
    }

    let dest = target_dir.join("config.toml");
    match fs::copy(&source, &dest) {
        Ok(_) => println!("cargo:warning=Copied config.toml to {:?}", dest),
        Err(e) => println!("cargo:warning=Failed to copy config.toml: {}", e),
    }
}

/// `OUT_DIR` looks like `target/<profile>/build/backend-xxx/out`.
fn target_profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
