//! Build script validating the embedded site content.
//!
//! Every `content/*.json` file is parsed at build time so that a malformed
//! content edit fails the build instead of producing an empty page at runtime.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=content");

    let content_dir = Path::new("content");

    if !content_dir.exists() {
        println!("cargo:warning=Content directory not found, skipping validation");
        return;
    }

    let entries = match fs::read_dir(content_dir) {
        Ok(entries) => entries,
        Err(e) => panic!("Failed to read content directory: {}", e),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        println!("cargo:rerun-if-changed={}", path.display());

        if let Err(e) = validate_json(&path) {
            panic!("Invalid content file {}: {}", path.display(), e);
        }
    }
}

fn validate_json(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    if !value.is_array() && !value.is_object() {
        return Err("top-level value must be an array or an object".into());
    }

    Ok(())
}
