use house_hunt_core::listings::Catalog;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = read_contents(&canonical)?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Load a listing catalog from JSON, or YAML when the extension says so.
/// Without a path the bundled sample catalog is used.
pub fn read_catalog(path: Option<&str>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        log::debug!("no --catalog given, using the bundled sample");
        return Ok(Catalog::sample()?);
    };

    let canonical = resolve_path(path)?;
    let contents = read_contents(&canonical)?;
    let is_yaml = matches!(
        canonical.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let catalog = if is_yaml {
        let catalog: Catalog = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
        catalog.validate()?;
        catalog
    } else {
        Catalog::from_json_str(&contents)?
    };
    log::debug!("read {} listings from {}", catalog.len(), canonical.display());
    Ok(catalog)
}

fn read_contents(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    Ok(contents)
}

/// Resolve the path relative to the working directory and check it is a file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
