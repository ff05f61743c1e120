// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported classification reports

use crate::pipeline::ClassifiedMap;
use crate::types::Tier;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    /// Guess the format from a file extension, defaulting to JSON.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(ReportOutputFormat::Json)
    }

    pub fn serialize(&self, report: &ClassificationReport) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

/// Snapshot of one classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub created_at: String,
    pub release_code: String,
    pub records: usize,
    /// Admin names drawn solid.
    pub highlighted: Vec<String>,
    /// Admin names drawn hatched.
    pub partial: Vec<String>,
    pub background: usize,
    pub unsupported: Vec<String>,
}

impl ClassificationReport {
    pub fn from_classified(classified: &ClassifiedMap, release_code: &str) -> Self {
        let names_in = |tier: Tier| {
            let mut names: Vec<String> = classified
                .iter()
                .filter(|(_, class)| class.tier() == tier)
                .map(|(record, _)| record.display_name().to_string())
                .collect();
            names.sort();
            names.dedup();
            names
        };

        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            release_code: release_code.to_string(),
            records: classified.records.len(),
            highlighted: names_in(Tier::Highlighted),
            partial: names_in(Tier::Partial),
            background: classified.counts().background,
            unsupported: classified.unsupported.clone(),
        }
    }

    pub fn save(&self, path: &Path, format: ReportOutputFormat) -> Result<()> {
        let content = format.serialize(self)?;
        fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
        Ok(())
    }
}
