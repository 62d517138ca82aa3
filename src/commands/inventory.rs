use anyhow::Result;
use tracing::info;

use crate::catalog::load_disc_catalog;
use crate::cli::InventoryArgs;
use crate::model::{CatalogInventoryManifest, SourceEntry};
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

pub fn run(args: InventoryArgs) -> Result<()> {
    let catalog = load_disc_catalog(&args.catalog_path)?;

    let discs_with_artist = catalog
        .values()
        .filter(|record| !record.artist.is_empty())
        .count();
    let discs_with_title = catalog
        .values()
        .filter(|record| !record.title.is_empty())
        .count();
    let discs_with_tracks = catalog
        .values()
        .filter(|record| !record.tracks.is_empty())
        .count();
    let track_count = catalog.values().map(|record| record.tracks.len()).sum();

    let manifest = CatalogInventoryManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        source: SourceEntry {
            path: args.catalog_path.display().to_string(),
            sha256: sha256_file(&args.catalog_path)?,
        },
        disc_count: catalog.len(),
        discs_with_artist,
        discs_with_title,
        discs_with_tracks,
        track_count,
    };

    info!(
        source = %manifest.source.path,
        disc_count = manifest.disc_count,
        discs_with_artist = manifest.discs_with_artist,
        discs_with_title = manifest.discs_with_title,
        discs_with_tracks = manifest.discs_with_tracks,
        track_count = manifest.track_count,
        "catalog inventoried"
    );

    if let Some(manifest_path) = &args.manifest_path {
        write_json_pretty(manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote inventory manifest");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::run;
    use crate::cli::InventoryArgs;

    #[test]
    fn inventory_writes_a_manifest_for_a_small_catalog() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let catalog_path = dir.path().join("discs.xml");
        std::fs::write(
            &catalog_path,
            "<discs>
               <disc><id>1</id><artist>Beatles</artist><dtitle>Abbey Road</dtitle>
                 <title>Come Together</title><title>Something</title></disc>
               <disc><id>2</id><dtitle>Unknown</dtitle></disc>
               <disc><artist>No Id</artist></disc>
             </discs>",
        )
        .expect("fixture should be written");

        let manifest_path = dir.path().join("inventory.json");
        run(InventoryArgs {
            catalog_path: catalog_path.clone(),
            manifest_path: Some(manifest_path.clone()),
        })
        .expect("inventory should succeed");

        let raw = std::fs::read_to_string(&manifest_path).expect("manifest should exist");
        let manifest: serde_json::Value =
            serde_json::from_str(&raw).expect("manifest should be valid json");

        assert_eq!(manifest["disc_count"], 2);
        assert_eq!(manifest["discs_with_artist"], 1);
        assert_eq!(manifest["discs_with_title"], 2);
        assert_eq!(manifest["discs_with_tracks"], 1);
        assert_eq!(manifest["track_count"], 2);
        assert_eq!(
            manifest["source"]["path"],
            catalog_path.display().to_string()
        );
    }

    #[test]
    fn inventory_fails_on_missing_catalog() {
        let args = InventoryArgs {
            catalog_path: PathBuf::from("/nonexistent/discs.xml"),
            manifest_path: None,
        };
        assert!(run(args).is_err());
    }
}
