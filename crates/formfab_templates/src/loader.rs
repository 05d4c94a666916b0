//! Catalog loading from a skeleton directory.
//!
//! Each family lives in its own subdirectory holding a `skeleton.yaml`
//! manifest (family name, template file, declared tokens) next to the
//! template text itself. The bundled catalog under `catalog/` uses this
//! layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};
use crate::skeleton::{TemplateCatalog, TemplateSkeleton, TokenDecl};

/// On-disk manifest for one skeleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkeletonManifest {
    /// Family name the skeleton registers under.
    pub family: String,
    /// Template text file, relative to the manifest.
    pub template: String,
    /// Declared placeholder tokens.
    pub tokens: Vec<TokenDecl>,
}

/// Loads skeleton directories into a [`TemplateCatalog`].
pub struct CatalogLoader {
    catalog_path: PathBuf,
}

impl CatalogLoader {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
        }
    }

    /// Load every skeleton under the catalog directory.
    ///
    /// A directory that fails to load is skipped with a warning so one
    /// broken family does not take down the rest of the catalog.
    pub fn load_all(&self) -> TemplateResult<TemplateCatalog> {
        let mut catalog = TemplateCatalog::new();

        if !self.catalog_path.exists() {
            warn!("Catalog directory does not exist: {:?}", self.catalog_path);
            return Ok(catalog);
        }

        for entry in WalkDir::new(&self.catalog_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_dir() {
                match self.load_skeleton(path) {
                    Ok(skeleton) => {
                        info!("Loaded skeleton family: {}", skeleton.family());
                        catalog.register(skeleton);
                    }
                    Err(e) => {
                        warn!("Failed to load skeleton from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(catalog)
    }

    /// Load a single skeleton from a family directory.
    pub fn load_skeleton(&self, path: &Path) -> TemplateResult<TemplateSkeleton> {
        let manifest_path = path.join("skeleton.yaml");
        if !manifest_path.exists() {
            return Err(TemplateError::InvalidSkeleton {
                family: path.to_string_lossy().to_string(),
                message: "no skeleton.yaml found".to_string(),
            });
        }

        debug!("Loading skeleton manifest from {:?}", manifest_path);
        let manifest: SkeletonManifest = serde_yaml::from_str(&fs::read_to_string(&manifest_path)?)?;

        let body_path = path.join(&manifest.template);
        if !body_path.exists() {
            return Err(TemplateError::InvalidSkeleton {
                family: manifest.family,
                message: format!("template file not found: {}", manifest.template),
            });
        }
        let body = fs::read_to_string(&body_path)?;

        TemplateSkeleton::new(manifest.family, body, manifest.tokens)
    }
}
