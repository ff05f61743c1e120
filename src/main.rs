// SPDX-License-Identifier: PMPL-1.0-or-later

//! release-worldmap: render the supported-languages world map
//!
//! Reads `highlighted_countries.txt` and `partially_supported_countries.txt`,
//! matches them against a Natural Earth admin-0 shapefile and writes
//! `world_map.png` and `world_map.svg`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use release_worldmap::catalog::Iso3166Catalog;
use release_worldmap::config::MapConfig;
use release_worldmap::report::{self, ClassificationReport, ReportOutputFormat};
use release_worldmap::{diagnostics, pipeline, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "release-worldmap")]
#[command(version)]
#[command(about = "Render a world map of the countries a release supports")]
#[command(long_about = None)]
struct Cli {
    /// YAML configuration file (default: ./worldmap.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify countries and write world_map.png and world_map.svg (default)
    Render {
        #[command(flatten)]
        inputs: InputArgs,

        /// Release code drawn under the logo
        #[arg(short, long)]
        release: Option<String>,

        /// PNG resolution
        #[arg(long)]
        dpi: Option<u32>,

        /// List every highlighted record
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify countries without rendering
    Check {
        #[command(flatten)]
        inputs: InputArgs,

        /// Save the classification report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format (default: from the output extension)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        /// List every highlighted record
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how country names resolve against the catalog
    Lookup {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Check that inputs and output locations are in place
    Doctor {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args, Default)]
struct InputArgs {
    /// Fully supported country list
    #[arg(long, value_name = "FILE")]
    highlighted: Option<PathBuf>,

    /// Partially supported country list
    #[arg(long, value_name = "FILE")]
    partial: Option<PathBuf>,

    /// Admin-0 countries shapefile
    #[arg(long, value_name = "FILE")]
    shapefile: Option<PathBuf>,

    /// Logo image drawn above the map
    #[arg(long, value_name = "FILE")]
    logo: Option<PathBuf>,

    /// Directory receiving world_map.png and world_map.svg
    #[arg(short = 'd', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl InputArgs {
    fn apply(self, config: &mut MapConfig) {
        let paths = &mut config.paths;
        if let Some(path) = self.highlighted {
            paths.highlighted = path;
        }
        if let Some(path) = self.partial {
            paths.partial = path;
        }
        if let Some(path) = self.shapefile {
            paths.shapefile = path;
        }
        if let Some(path) = self.logo {
            paths.logo = path;
        }
        if let Some(path) = self.output_dir {
            paths.output_dir = path;
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<MapConfig> {
    match path {
        Some(path) => MapConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display())),
        None => Ok(MapConfig::load_default()?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;
    let catalog = Iso3166Catalog::new();

    let command = cli.command.unwrap_or(Commands::Render {
        inputs: InputArgs::default(),
        release: None,
        dpi: None,
        verbose: false,
    });

    match command {
        Commands::Render {
            inputs,
            release,
            dpi,
            verbose,
        } => {
            inputs.apply(&mut config);
            if let Some(release) = release {
                config.release_code = release;
            }
            if let Some(dpi) = dpi {
                config.figure.dpi = dpi;
            }

            let classified = pipeline::classify_inputs(&config, &catalog)?;
            report::print_notices(&classified.notices);
            report::print_unsupported(&classified.unsupported);
            if verbose {
                report::print_summary(&classified, true);
            }

            let rendered =
                render::render(&classified.records, &classified.classifications, &config)?;
            if let Some(notice) = pipeline::logo_notice(&rendered.logo) {
                report::print_notices(&[notice]);
            }
            report::print_saved(&rendered);
        }

        Commands::Check {
            inputs,
            output,
            format,
            verbose,
        } => {
            inputs.apply(&mut config);

            let classified = pipeline::classify_inputs(&config, &catalog)?;
            report::print_notices(&classified.notices);
            report::print_unsupported(&classified.unsupported);
            report::print_summary(&classified, verbose);

            if let Some(output_path) = output {
                let format = format.unwrap_or_else(|| ReportOutputFormat::for_path(&output_path));
                ClassificationReport::from_classified(&classified, &config.release_code)
                    .save(&output_path, format)?;
                println!("Report saved to: {}", output_path.display());
            }
        }

        Commands::Lookup { names } => {
            for name in &names {
                report::print_lookup(&catalog, name);
            }
        }

        Commands::Doctor { inputs } => {
            inputs.apply(&mut config);
            diagnostics::run_self_diagnostics(&config)?;
        }
    }

    Ok(())
}
