use std::path::{Path, PathBuf};

use serde::Deserialize;
use tagkit_naming::Namespace;

use crate::{Error, Result};

/// The contents of `tagkit-gen.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    /// Where the catalog source is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Manifests to derive, in order.
    #[serde(rename = "manifest", default)]
    pub manifests: Vec<ManifestRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestRef {
    pub namespace: Namespace,
    pub path: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("../html/src/elements/catalog.rs")
}

impl GenConfig {
    /// The config that ships next to the generator.
    pub const DEFAULT_PATH: &'static str = concat!(env!("CARGO_MANIFEST_DIR"), "/tagkit-gen.toml");

    /// Read a config file. Relative paths inside it are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GenConfig = toml::from_str(&contents).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or(Path::new("."));
        Ok(config.resolve(base))
    }

    fn resolve(mut self, base: &Path) -> Self {
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        for manifest in &mut self.manifests {
            if manifest.path.is_relative() {
                manifest.path = base.join(&manifest.path);
            }
        }
        self
    }
}
