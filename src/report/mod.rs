// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console output and report export

pub mod output;

pub use output::{ClassificationReport, ReportOutputFormat};

use crate::catalog::Iso3166Catalog;
use crate::pipeline::{ClassifiedMap, Notice};
use crate::render::RenderedMap;
use crate::resolve::normalized_variants;
use colored::*;

pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice {
            Notice::MissingPartialList(path) => println!(
                "{} {} not found, no countries will be drawn as partially supported",
                "notice:".yellow(),
                path.display()
            ),
            Notice::MissingLogo(path) => println!(
                "{} logo {} not found, drawing the release code only",
                "notice:".yellow(),
                path.display()
            ),
            Notice::UnreadableLogo { path, reason } => println!(
                "{} cannot decode logo {} ({}), drawing the release code only",
                "warning:".yellow().bold(),
                path.display(),
                reason
            ),
        }
    }
}

pub fn print_unsupported(unsupported: &[String]) {
    if unsupported.is_empty() {
        return;
    }
    println!(
        "{}",
        "The following countries are not supported and will not be highlighted:".red()
    );
    for name in unsupported {
        println!("  - {}", name);
    }
}

pub fn print_summary(classified: &ClassifiedMap, verbose: bool) {
    let counts = classified.counts();
    println!("\n{}", "CLASSIFICATION".bold().yellow());
    println!("  Records: {}", classified.records.len());
    println!("  Highlighted: {}", counts.highlighted.to_string().green());
    println!("  Partially supported: {}", counts.partial.to_string().cyan());
    println!("  Background: {}", counts.background);

    if verbose {
        for (record, class) in classified.iter() {
            if class.highlighted || class.partial {
                println!("    [{}] {}", class.tier(), record.display_name());
            }
        }
    }
}

pub fn print_saved(rendered: &RenderedMap) {
    println!(
        "Map saved as {} and {}",
        rendered.png_path.display().to_string().bold(),
        rendered.svg_path.display().to_string().bold()
    );
}

/// `lookup` subcommand output.
pub fn print_lookup(catalog: &Iso3166Catalog, name: &str) {
    match catalog.find(name) {
        Some(entry) => {
            println!("{} ({} / {} / {})", entry.name.bold(), entry.alpha2, entry.alpha3, entry.numeric);
            if let Some(official) = entry.official_name {
                println!("  Official name: {}", official);
            }
            if let Some(common) = entry.common_name {
                println!("  Common name: {}", common);
            }
        }
        None => println!("{} is not in the catalog, it will match literally", name.yellow()),
    }

    println!("  Variants matched against the map:");
    for variant in normalized_variants(catalog, name) {
        println!("    - {}", variant);
    }
}
