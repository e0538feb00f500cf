//! Places the workspace `config.toml` beside the server binary so
//! `shared::config::load_config` finds it at run time.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// `OUT_DIR` is `target/<profile>/build/backend-*/out`; the binary sits in
/// `target/<profile>`.
fn binary_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR")?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let Some(source) = manifest_dir.ancestors().nth(2).map(|root| root.join("config.toml")) else {
        return;
    };
    let Some(dest_dir) = binary_dir() else {
        println!("cargo:warning=could not locate the binary directory; config.toml not copied");
        return;
    };

    if !source.exists() {
        println!("cargo:warning=no config.toml at {:?}; embedded defaults apply", source);
        return;
    }
    let dest = dest_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        panic!("failed to copy {:?} to {:?}: {}", source, dest, e);
    }
}
