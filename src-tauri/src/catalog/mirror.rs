//! JSON mirror of the product catalog.
//!
//! Rewritten after every catalog mutation so the on-disk copy always
//! reflects the SQLite state. The mirror is what survives even when the
//! hosted store is unreachable.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::NamedTempFile;
use tracing::info;

use super::types::SavedProduct;

/// File name of the catalog mirror inside the app data dir.
const MIRROR_FILE: &str = "products.json";

pub fn mirror_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MIRROR_FILE)
}

/// Replace the mirror with the given product list, atomically.
pub fn write_mirror(data_dir: &Path, products: &[SavedProduct]) -> Result<()> {
    let path = mirror_path(data_dir);
    let json = serde_json::to_string_pretty(products)?;

    std::fs::create_dir_all(data_dir)?;
    let mut temp = NamedTempFile::new_in(data_dir)?;
    temp.write_all(json.as_bytes())?;
    temp.flush()?;
    temp.persist(&path)?;

    info!("Mirrored {} products to {:?}", products.len(), path);
    Ok(())
}

/// Read the mirror. A missing file is an empty catalog; a corrupt file
/// is an error so the caller can fall back to the database.
pub fn read_mirror(data_dir: &Path) -> Result<Vec<SavedProduct>> {
    let path = mirror_path(data_dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_product(id: i64, name: &str) -> SavedProduct {
        SavedProduct {
            id,
            name: name.to_string(),
            brand: "CeraVe".to_string(),
            product_type: "Moisturizer".to_string(),
            image_ref: "data:image/jpeg;base64,xyz".to_string(),
            description: "Daily moisturizer".to_string(),
            usage_time: "PM".to_string(),
            ingredients: vec!["Ceramides".to_string()],
            benefits: vec!["Barrier repair".to_string()],
            date_added: "2026-08-08 12:00:00".to_string(),
            in_routine: false,
            synced: true,
        }
    }

    #[test]
    fn test_read_missing_mirror_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(read_mirror(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let products = vec![sample_product(1, "A"), sample_product(2, "B")];

        write_mirror(dir.path(), &products).unwrap();
        let loaded = read_mirror(dir.path()).unwrap();
        assert_eq!(loaded, products);
    }

    #[test]
    fn test_write_replaces_previous_mirror() {
        let dir = TempDir::new().unwrap();
        write_mirror(dir.path(), &[sample_product(1, "A")]).unwrap();
        write_mirror(dir.path(), &[sample_product(2, "B")]).unwrap();

        let loaded = read_mirror(dir.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "B");
    }
}
