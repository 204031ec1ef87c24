//! Loads the guide collection from a `commands.json` file.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::model::Category;

/// Reads and parses the guide collection.
///
/// An empty collection is legal input for index construction (the index is
/// simply empty), so it is only logged here; callers that need guides
/// decide for themselves.
pub fn load_categories(path: &Path) -> Result<Vec<Category>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let categories: Vec<Category> =
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if categories.is_empty() {
        tracing::warn!("no guide categories found in {}", path.display());
    } else {
        let guide_count: usize = categories.iter().map(|c| c.guides.len()).sum();
        tracing::info!(
            "loaded {} categories ({} guides) from {}",
            categories.len(),
            guide_count,
            path.display()
        );
    }

    Ok(categories)
}
