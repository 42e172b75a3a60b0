//! CLI commands for bolt-pm

use anyhow::{bail, Context, Result};
use std::fs;

use crate::compiler::{Invocation, Toolchain};
use crate::config::{ProjectPaths, COMPILER_NAME, INSTALL_VERSION, MANIFEST_FILE};
use crate::manifest::Manifest;

/// Initialize a new project: write bolt.toml and the entrypoint stub
pub fn new(paths: &ProjectPaths) -> Result<()> {
    if paths.manifest.exists() {
        println!("{MANIFEST_FILE} already exists.");
        return Ok(());
    }

    let manifest = Manifest::new_project();
    manifest.save(&paths.manifest)?;
    println!("✓ Initialized new Bolt project in {MANIFEST_FILE}");

    let entrypoint = paths.entrypoint(&manifest.package.entrypoint);
    if !entrypoint.exists() {
        fs::write(&entrypoint, entrypoint_stub(&manifest.package.entrypoint))
            .with_context(|| format!("Failed to write {}", entrypoint.display()))?;
        println!("✓ Created entrypoint file: {}", manifest.package.entrypoint);
    }

    Ok(())
}

fn entrypoint_stub(file_name: &str) -> String {
    format!("// Main entrypoint: {file_name}\n\nint main() {{\n    \n    return 0;\n}}\n")
}

/// Add a dependency to bolt.toml at the fixed install version
pub fn install(paths: &ProjectPaths, package: &str) -> Result<()> {
    if !paths.manifest.exists() {
        bail!("no {MANIFEST_FILE} found. Run 'bolt-pm new' first.");
    }

    // Load before touching the file; a parse failure aborts with no write.
    let mut manifest = Manifest::load(&paths.manifest)?;
    manifest
        .dependencies
        .insert(package.to_string(), INSTALL_VERSION.to_string());
    manifest.save(&paths.manifest)?;

    println!("✓ Added '{package} = \"{INSTALL_VERSION}\"' to {MANIFEST_FILE}.");
    println!("Run 'bolt-pm build' to compile.");

    Ok(())
}

/// Compile the project by running the external compiler
pub fn build(paths: &ProjectPaths, toolchain: &dyn Toolchain) -> Result<()> {
    if !paths.manifest.exists() {
        bail!("no {MANIFEST_FILE} found. Cannot build.");
    }

    let manifest = Manifest::load(&paths.manifest)?;
    let invocation = Invocation::for_manifest(&manifest);

    println!(
        "Building project '{}' from {}...",
        manifest.package.name, manifest.package.entrypoint
    );
    println!("Compiler command: {}", invocation.render());

    let status = toolchain.run(&invocation)?;
    if status != 0 {
        bail!("build failed. Make sure '{COMPILER_NAME}' is in your PATH.");
    }

    println!("✓ Build successful! (output: {})", manifest.package.name);

    Ok(())
}
