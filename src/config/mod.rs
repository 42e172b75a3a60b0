//! Configuration for bolt-pm
//!
//! File names, the compiler binary, and default manifest values are fixed
//! at compile time; `ProjectPaths` anchors them to a project directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Manifest file name, always directly inside the project root.
pub const MANIFEST_FILE: &str = "bolt.toml";

/// External compiler binary invoked by `build`.
pub const COMPILER_NAME: &str = "bolt-compiler";

/// Package name written into a fresh manifest by `new`.
pub const DEFAULT_PACKAGE_NAME: &str = "new-bolt-project";

/// Output name used at build time when the manifest omits `package.name`.
pub const FALLBACK_OUTPUT_NAME: &str = "my-app";

/// Version written into a fresh manifest by `new`.
pub const DEFAULT_PACKAGE_VERSION: &str = "0.1.0";

/// Entrypoint file name used when the manifest omits `package.entrypoint`.
pub const DEFAULT_ENTRYPOINT: &str = "main.bolt";

/// Version recorded for every dependency added by `install`.
pub const INSTALL_VERSION: &str = "1.0.0";

/// Paths to the files bolt-pm reads and writes inside one project
pub struct ProjectPaths {
    pub root: PathBuf,
    pub manifest: PathBuf,
}

impl ProjectPaths {
    /// Paths rooted at the current working directory
    pub fn current() -> Result<Self> {
        let root =
            std::env::current_dir().context("Could not determine the working directory")?;
        Ok(Self::from_root(root))
    }

    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(MANIFEST_FILE),
            root,
        }
    }

    /// Location of an entrypoint source file inside the project
    pub fn entrypoint(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}
