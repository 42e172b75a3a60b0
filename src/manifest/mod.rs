//! The bolt.toml manifest
//!
//! One document per project: package metadata plus a flat dependency map.
//! Missing keys deserialize to fixed fallbacks; nothing beyond that is
//! validated.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::{
    DEFAULT_ENTRYPOINT, DEFAULT_PACKAGE_NAME, DEFAULT_PACKAGE_VERSION, FALLBACK_OUTPUT_NAME,
};

/// The `[package]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    #[serde(default = "fallback_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
}

impl Default for Package {
    fn default() -> Self {
        Self {
            name: fallback_name(),
            version: default_version(),
            entrypoint: default_entrypoint(),
        }
    }
}

fn fallback_name() -> String {
    FALLBACK_OUTPUT_NAME.to_string()
}

fn default_version() -> String {
    DEFAULT_PACKAGE_VERSION.to_string()
}

fn default_entrypoint() -> String {
    DEFAULT_ENTRYPOINT.to_string()
}

/// The whole bolt.toml document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub package: Package,
    /// Dependency name -> version string. Serialized even when empty so the
    /// `[dependencies]` table is always present on disk.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Fresh manifest as written by `bolt-pm new`
    pub fn new_project() -> Self {
        Self {
            package: Package {
                name: DEFAULT_PACKAGE_NAME.to_string(),
                version: DEFAULT_PACKAGE_VERSION.to_string(),
                entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            },
            dependencies: BTreeMap::new(),
        }
    }

    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Error parsing {}", path.display()))
    }

    /// Save the manifest to disk, replacing the whole file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize manifest")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let manifest: Manifest = toml::from_str("[package]\nversion = \"2.0\"\n").unwrap();
        assert_eq!(manifest.package.name, "my-app");
        assert_eq!(manifest.package.version, "2.0");
        assert_eq!(manifest.package.entrypoint, "main.bolt");
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_missing_package_table_falls_back() {
        let manifest: Manifest = toml::from_str("[dependencies]\nfmt = \"1.0.0\"\n").unwrap();
        assert_eq!(manifest.package.name, "my-app");
        assert_eq!(manifest.package.entrypoint, "main.bolt");
        assert_eq!(manifest.dependencies.len(), 1);
    }

    #[test]
    fn test_empty_dependencies_table_is_written() {
        let rendered = toml::to_string_pretty(&Manifest::new_project()).unwrap();
        assert!(rendered.contains("[dependencies]"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = toml::from_str::<Manifest>("this is not a manifest");
        assert!(result.is_err());
    }
}
