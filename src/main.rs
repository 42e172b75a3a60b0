//! bolt-pm - Package manager for the Bolt language
//!
//! Manages the bolt.toml manifest and builds projects via `bolt-compiler`

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use bolt_pm::commands;
use bolt_pm::compiler::SystemToolchain;
use bolt_pm::config::ProjectPaths;

#[derive(Parser)]
#[command(name = "bolt-pm")]
#[command(version, about = "Bolt Package Manager - manages bolt.toml and builds via bolt-compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project by creating bolt.toml
    New,

    /// Add a package to the dependencies
    Install {
        /// Package name to add
        package: String,
    },

    /// Compile the project with bolt-compiler
    Build,
}

fn main() -> ExitCode {
    // Usage errors exit 1 and `help` exits 0, so parse errors are handled
    // here instead of letting clap exit with its own code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let paths = match ProjectPaths::current() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::New => commands::new(&paths),
        Commands::Install { package } => commands::install(&paths, &package),
        Commands::Build => commands::build(&paths, &SystemToolchain),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
