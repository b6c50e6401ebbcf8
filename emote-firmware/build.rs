//! Build script for emote-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Checks emote.toml with the same parser the firmware runs at boot

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use emote_core::assets::builtin_registry;
use emote_core::config::parse_config;

fn main() {
    setup_linker();
    validate_config();
}

/// Copy memory.x next to the build output and pass the link scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    for arg in ["--nmagic", "-Tlink.x", "-Tlink-rp.x", "-Tdefmt.x"] {
        println!("cargo:rustc-link-arg-bins={}", arg);
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Fail the build unless the firmware will accept emote.toml as written
///
/// A file the firmware rejects at boot would silently fall back to the
/// defaults, so every runtime parse error is a build error here.
fn validate_config() {
    println!("cargo:rerun-if-changed=emote.toml");

    let config_path = Path::new("emote.toml");
    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| fail("cannot read emote.toml", &e.to_string()));

    // Full TOML parse first for line-numbered syntax errors
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        fail("invalid TOML syntax in emote.toml", &e.to_string());
    }

    let config = parse_config(&content).unwrap_or_else(|e| {
        fail(
            "emote.toml is valid TOML but the firmware cannot load it",
            &format!("{:?}: see the supported subset in emote-core/src/config/toml.rs", e),
        )
    });

    let registry = builtin_registry();
    for name in config.unresolved(&registry) {
        println!("cargo:warning=emote.toml: '{}' is not a catalogue emotion", name);
    }

    println!("cargo:warning=emote.toml validated successfully");
}

fn fail(what: &str, detail: &str) -> ! {
    let detail: String = detail
        .lines()
        .map(|line| format!("\n    {}", line))
        .collect();
    panic!("\n\nERROR: {}{}\n", what, detail);
}
