// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor` subcommand: checks that the configured inputs are in place.

use crate::config::MapConfig;
use anyhow::{anyhow, Result};
use std::path::Path;

pub fn run_self_diagnostics(config: &MapConfig) -> Result<()> {
    println!("release-worldmap self-diagnostics");

    let checks = collect_checks(config);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

pub(crate) fn collect_checks(config: &MapConfig) -> Vec<Diagnostic> {
    let paths = &config.paths;
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("release-worldmap {}", env!("CARGO_PKG_VERSION")),
    )];
    checks.push(match config.validate() {
        Ok(()) => Diagnostic::ok(
            "configuration",
            format!(
                "release {} ({} manual overrides)",
                config.release_code,
                config.manual_overrides.len()
            ),
        ),
        Err(err) => Diagnostic::error("configuration", err.to_string()),
    });
    checks.push(check_file("highlighted list", &paths.highlighted, Level::Error));
    checks.push(check_file("partial list", &paths.partial, Level::Warn));
    checks.push(check_file("shapefile", &paths.shapefile, Level::Error));
    checks.push(check_file("shapefile attributes", &paths.shapefile.with_extension("dbf"), Level::Error));
    checks.push(check_file("logo", &paths.logo, Level::Warn));
    checks.push(check_directory("output directory", &paths.output_dir));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug)]
pub(crate) struct Diagnostic {
    pub(crate) label: &'static str,
    pub(crate) level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_file(label: &'static str, path: &Path, missing_level: Level) -> Diagnostic {
    if path.is_file() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::new(
            label,
            missing_level,
            format!("{} exists but is not a regular file", path.display()),
        )
    } else {
        Diagnostic::new(label, missing_level, format!("{} missing", path.display()))
    }
}

fn check_directory(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(label, format!("{} exists but is not a directory", path.display()))
    } else {
        Diagnostic::new(
            label,
            Level::Warn,
            format!("{} missing (created on render)", path.display()),
        )
    }
}
