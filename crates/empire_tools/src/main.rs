//! Empire - Development Tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use empire_core::buildable::BuildCategory;
use empire_tools::list::{list_entries, parse_category, parse_known, render_json, render_table};
use empire_tools::validate::{summarize, validate_catalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "empire-tools")]
#[command(about = "Development tools for the empire catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file
    Validate {
        /// Path to a RON catalog; the embedded standard catalog if omitted
        path: Option<PathBuf>,
    },
    /// List what can be built with a set of advances
    List {
        /// Comma-separated advance keys
        #[arg(long, default_value = "")]
        known: String,
        /// improvement, spaceship, unit, land, sea or air
        #[arg(long, value_parser = parse_category)]
        category: Option<BuildCategory>,
        /// Catalog to list from; the embedded standard catalog if omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            match &path {
                Some(path) => tracing::info!("Validating catalog: {}", path.display()),
                None => tracing::info!("Validating embedded standard catalog"),
            }
            match validate_catalog(path.as_deref()) {
                Ok(catalog) => {
                    let summary = summarize(&catalog);
                    tracing::info!(
                        improvements = summary.improvements,
                        units = summary.units,
                        spaceship_parts = summary.spaceship_parts,
                        "Validation passed"
                    );
                }
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::List {
            known,
            category,
            catalog,
            json,
        } => {
            let catalog = match validate_catalog(catalog.as_deref()) {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::error!("Failed to load catalog: {e}");
                    std::process::exit(1);
                }
            };
            let entries = list_entries(&catalog, &parse_known(&known), category);
            if json {
                match render_json(&entries) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        tracing::error!("{e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", render_table(&entries));
            }
        }
    }
}
