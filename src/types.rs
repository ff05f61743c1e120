// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for release-worldmap

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Country names as read from an input list, in sorted order.
pub type CountryNameList = BTreeSet<String>;

/// Normalized (trimmed, lowercase) name variants for one input list.
pub type VariantSet = BTreeSet<String>;

/// Names that are always highlighted, compared in normalized form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualOverrides(BTreeSet<String>);

impl ManualOverrides {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| crate::resolve::normalize(name.as_ref()))
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.0.contains(normalized)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One feature of the base map: its outline plus the two name attributes
/// used for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryRecord {
    /// `ADMIN` attribute
    pub admin: String,
    /// `SOVEREIGNT` attribute
    pub sovereign: String,
    pub shape: MultiPolygon<f64>,
}

impl GeometryRecord {
    pub fn new(admin: impl Into<String>, sovereign: impl Into<String>, shape: MultiPolygon<f64>) -> Self {
        Self {
            admin: admin.into(),
            sovereign: sovereign.into(),
            shape,
        }
    }

    /// Label used in reports and SVG attributes.
    pub fn display_name(&self) -> &str {
        if self.admin.trim().is_empty() {
            self.sovereign.trim()
        } else {
            self.admin.trim()
        }
    }
}

/// Per-record classification. The two flags are computed independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub highlighted: bool,
    pub partial: bool,
}

impl Classification {
    /// Draw tier. Partial support wins over a plain highlight.
    pub fn tier(&self) -> Tier {
        if self.partial {
            Tier::Partial
        } else if self.highlighted {
            Tier::Highlighted
        } else {
            Tier::Background
        }
    }
}

/// Rendering layer, listed in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Background,
    Highlighted,
    Partial,
}

impl Tier {
    pub fn all() -> [Tier; 3] {
        [Tier::Background, Tier::Highlighted, Tier::Partial]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Background => "background",
            Tier::Highlighted => "highlighted",
            Tier::Partial => "partial",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
