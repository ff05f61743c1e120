// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country classification.
//!
//! Each geometry record is matched by its `ADMIN` and `SOVEREIGNT`
//! attributes against the resolved variant sets. Matching is exact on the
//! normalized form; there is no fuzzy matching.

use crate::catalog::CountryCatalog;
use crate::resolve::{normalize, normalized_variants};
use crate::types::{Classification, GeometryRecord, ManualOverrides, Tier, VariantSet};
use std::collections::BTreeSet;

pub fn classify(
    record: &GeometryRecord,
    highlight_variants: &VariantSet,
    partial_variants: &VariantSet,
    overrides: &ManualOverrides,
) -> Classification {
    let admin = normalize(&record.admin);
    let sovereign = normalize(&record.sovereign);
    let fields = [admin.as_str(), sovereign.as_str()];
    let matches = |set: &VariantSet| fields.iter().any(|f| !f.is_empty() && set.contains(*f));

    Classification {
        highlighted: matches(highlight_variants)
            || fields.iter().any(|f| !f.is_empty() && overrides.contains(f)),
        partial: matches(partial_variants),
    }
}

/// Classify every record, preserving record order.
pub fn classify_all(
    records: &[GeometryRecord],
    highlight_variants: &VariantSet,
    partial_variants: &VariantSet,
    overrides: &ManualOverrides,
) -> Vec<Classification> {
    records
        .iter()
        .map(|record| classify(record, highlight_variants, partial_variants, overrides))
        .collect()
}

/// Union of normalized admin and sovereign values over all records.
pub fn geometry_name_values(records: &[GeometryRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| [normalize(&record.admin), normalize(&record.sovereign)])
        .filter(|value| !value.is_empty())
        .collect()
}

/// Input names none of whose variants appear among the geometry names.
///
/// The report follows the iteration order of `names`.
pub fn find_unsupported<'a, I>(
    catalog: &dyn CountryCatalog,
    names: I,
    geometry_names: &BTreeSet<String>,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .filter(|name| {
            !normalized_variants(catalog, name)
                .iter()
                .any(|variant| geometry_names.contains(variant))
        })
        .cloned()
        .collect()
}

/// Per-tier record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub background: usize,
    pub highlighted: usize,
    pub partial: usize,
}

impl TierCounts {
    pub fn tally(classifications: &[Classification]) -> Self {
        classifications
            .iter()
            .fold(TierCounts::default(), |mut counts, class| {
                match class.tier() {
                    Tier::Background => counts.background += 1,
                    Tier::Highlighted => counts.highlighted += 1,
                    Tier::Partial => counts.partial += 1,
                }
                counts
            })
    }
}
