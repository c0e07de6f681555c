//! # runeweave CLI Entry Point
//!
//! Validates the shipped configuration tree against its schemas, the same
//! checks the integration suite runs, packaged for content authors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use runeweave_loader::ConfigLoader;

/// Content pipeline validator for the runeweave configuration tree.
///
/// Checks every JSON content file under the config directory against its
/// JSON Schema and reports each violated constraint with its document path.
#[derive(Parser, Debug)]
#[command(name = "runeweave", version, about)]
struct Cli {
    /// Root of the configuration tree.
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate every content file against its schema.
    Validate,
    /// List the schema documents and their named definitions.
    Schemas,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let loader = ConfigLoader::new(&cli.config_dir);

    match cli.command {
        Commands::Validate => {
            let report = loader.validate_tree()?;
            for file in &report.files {
                if file.violations.is_empty() {
                    println!("ok    {}", file.path.display());
                } else {
                    println!(
                        "FAIL  {} ({} violations, schema {})",
                        file.path.display(),
                        file.violations.len(),
                        file.schema_name,
                    );
                    for violation in &file.violations {
                        println!("      {violation}");
                    }
                }
            }
            println!(
                "{} files checked, {} violations",
                report.files.len(),
                report.violation_count(),
            );
            Ok(report.is_clean())
        }
        Commands::Schemas => {
            let schema_dir = cli.config_dir.join("schemas");
            let mut names: Vec<PathBuf> = std::fs::read_dir(&schema_dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(".schema.json"))
                })
                .collect();
            names.sort();

            for path in names {
                let document = loader.registry().load_path(&path)?;
                println!(
                    "{}  ({}, root {})",
                    path.file_name().and_then(|n| n.to_str()).unwrap_or("?"),
                    document.title().unwrap_or("<untitled>"),
                    document.root_type().unwrap_or("<untyped>"),
                );
                for name in document.definition_names() {
                    println!("    {name}");
                }
            }
            Ok(true)
        }
    }
}
