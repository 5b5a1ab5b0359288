use anyhow::Context;
use log::info;
use profilecore::content::Catalog;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a content table from YAML and checks the deck invariants.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading content {}", path.display()))?;
    let catalog: Catalog = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing content {}", path.display()))?;
    let catalog = catalog
        .validated()
        .with_context(|| format!("validating content {}", path.display()))?;
    info!(
        "loaded {} sections and {} testimonials from {}",
        catalog.sections.len(),
        catalog.testimonials.len(),
        path.display()
    );
    Ok(catalog)
}

pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => load_catalog_file(path),
        None => Ok(Catalog::builtin()),
    }
}

/// Catalog assets that would 404 when served from `assets`. Remote URLs are
/// not checked.
pub fn missing_assets(catalog: &Catalog, assets: &Path) -> Vec<PathBuf> {
    let mut missing = Vec::new();
    for reference in catalog.asset_paths() {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            continue;
        }
        let file = assets.join(reference.trim_start_matches('/'));
        if !file.is_file() && !missing.contains(&file) {
            missing.push(file);
        }
    }
    missing
}
