//! Invocation of the external Bolt compiler
//!
//! bolt-pm never links against the compiler; `build` assembles an argv and
//! runs the `bolt-compiler` binary found on PATH. The `Toolchain` trait is
//! the process boundary, so tests can substitute a fake and inspect the
//! constructed command.

use anyhow::{Context, Result};
use std::process::Command;

use crate::config::COMPILER_NAME;
use crate::manifest::Manifest;

/// A fully-assembled compiler command: program plus argv
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Derive the compiler command for a manifest: entrypoint, output name,
    /// and one `-l` flag per dependency
    pub fn for_manifest(manifest: &Manifest) -> Self {
        let mut args = vec![
            manifest.package.entrypoint.clone(),
            "-o".to_string(),
            manifest.package.name.clone(),
        ];
        for dep in manifest.dependencies.keys() {
            args.push(format!("-l{dep}"));
        }
        Self {
            program: COMPILER_NAME.to_string(),
            args,
        }
    }

    /// The command line as shown to the user
    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Synchronous external-command execution, reporting the exit code
pub trait Toolchain {
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}

/// Runs the real compiler, inheriting stdio; blocks until it exits
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .with_context(|| {
                format!(
                    "Failed to run '{}'. Make sure it is in your PATH.",
                    invocation.program
                )
            })?;
        // Termination by signal leaves no code; report it as a plain failure.
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_includes_entrypoint_output_and_flags() {
        let mut manifest = Manifest::new_project();
        manifest.package.name = "demo".to_string();
        manifest.package.entrypoint = "app.bolt".to_string();
        manifest
            .dependencies
            .insert("zlib".to_string(), "1.0.0".to_string());
        manifest
            .dependencies
            .insert("fmt".to_string(), "1.0.0".to_string());

        let invocation = Invocation::for_manifest(&manifest);
        assert_eq!(invocation.program, "bolt-compiler");
        assert_eq!(
            invocation.args,
            vec!["app.bolt", "-o", "demo", "-lfmt", "-lzlib"]
        );
    }

    #[test]
    fn test_render_joins_program_and_args() {
        let invocation = Invocation {
            program: "bolt-compiler".to_string(),
            args: vec![
                "main.bolt".to_string(),
                "-o".to_string(),
                "my-app".to_string(),
            ],
        };
        assert_eq!(invocation.render(), "bolt-compiler main.bolt -o my-app");
    }
}
