// SPDX-License-Identifier: PMPL-1.0-or-later

//! The batch pipeline: load lists, load geometry, classify, render.
//!
//! Nothing here prints. Recoverable absences are collected as [`Notice`]s
//! and fatal ones come back as [`MapError`]; the caller decides how to
//! present both.

use crate::catalog::CountryCatalog;
use crate::classify::{classify_all, find_unsupported, geometry_name_values, TierCounts};
use crate::config::MapConfig;
use crate::error::MapResult;
use crate::geometry;
use crate::input::{load_list, CaseMode, ListSource};
use crate::render::{self, LogoSource, RenderedMap};
use crate::resolve::build_normalized_variant_set;
use crate::types::{Classification, CountryNameList, GeometryRecord, ManualOverrides};
use std::path::PathBuf;

/// A recoverable condition worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MissingPartialList(PathBuf),
    MissingLogo(PathBuf),
    UnreadableLogo { path: PathBuf, reason: String },
}

/// Outcome of the matching stages for one pair of lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Matching {
    pub classifications: Vec<Classification>,
    pub unsupported: Vec<String>,
}

/// Resolve both lists against the catalog and classify every record.
pub fn match_records(
    records: &[GeometryRecord],
    highlighted: &CountryNameList,
    partial: &CountryNameList,
    overrides: &ManualOverrides,
    catalog: &dyn CountryCatalog,
) -> Matching {
    let highlight_variants = build_normalized_variant_set(catalog, highlighted);
    let partial_variants = build_normalized_variant_set(catalog, partial);
    let geometry_names = geometry_name_values(records);

    Matching {
        classifications: classify_all(records, &highlight_variants, &partial_variants, overrides),
        unsupported: find_unsupported(catalog, highlighted, &geometry_names),
    }
}

#[derive(Debug, Clone)]
pub struct ClassifiedMap {
    pub records: Vec<GeometryRecord>,
    pub classifications: Vec<Classification>,
    pub highlighted: CountryNameList,
    pub partial: CountryNameList,
    pub unsupported: Vec<String>,
    pub notices: Vec<Notice>,
}

impl ClassifiedMap {
    pub fn counts(&self) -> TierCounts {
        TierCounts::tally(&self.classifications)
    }

    /// Records paired with their classification, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&GeometryRecord, &Classification)> {
        self.records.iter().zip(self.classifications.iter())
    }
}

/// Stages 1-3. The primary list and the shapefile are required; the
/// partial-support list is optional.
pub fn classify_inputs(config: &MapConfig, catalog: &dyn CountryCatalog) -> MapResult<ClassifiedMap> {
    config.validate()?;
    let paths = &config.paths;
    let mut notices = Vec::new();

    let highlighted =
        load_list(&paths.highlighted, CaseMode::AsTyped)?.require("highlighted country list")?;

    let partial = match load_list(&paths.partial, CaseMode::Lowercase)? {
        ListSource::Found(names) => names,
        missing @ ListSource::Missing(_) => {
            notices.push(Notice::MissingPartialList(paths.partial.clone()));
            missing.or_empty()
        }
    };

    let records = geometry::project_records(geometry::load_records(&paths.shapefile)?);
    let overrides = ManualOverrides::new(&config.manual_overrides);
    let matching = match_records(&records, &highlighted, &partial, &overrides, catalog);

    Ok(ClassifiedMap {
        records,
        classifications: matching.classifications,
        highlighted,
        partial,
        unsupported: matching.unsupported,
        notices,
    })
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub classified: ClassifiedMap,
    pub rendered: RenderedMap,
}

impl RunOutcome {
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = self.classified.notices.clone();
        notices.extend(logo_notice(&self.rendered.logo));
        notices
    }
}

/// What to tell the user about a logo that could not be drawn.
pub fn logo_notice(logo: &LogoSource) -> Option<Notice> {
    match logo {
        LogoSource::Loaded(_) => None,
        LogoSource::Missing(path) => Some(Notice::MissingLogo(path.clone())),
        LogoSource::Unreadable { path, reason } => Some(Notice::UnreadableLogo {
            path: path.clone(),
            reason: reason.clone(),
        }),
    }
}

/// The whole pipeline. Nothing is written if classification fails.
pub fn run(config: &MapConfig, catalog: &dyn CountryCatalog) -> MapResult<RunOutcome> {
    let classified = classify_inputs(config, catalog)?;
    let rendered = render::render(&classified.records, &classified.classifications, config)?;
    Ok(RunOutcome {
        classified,
        rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn logo_notice_only_for_absent_logos() {
        let missing = LogoSource::Missing(PathBuf::from("logo.png"));
        assert_eq!(
            logo_notice(&missing),
            Some(Notice::MissingLogo(PathBuf::from("logo.png")))
        );

        let unreadable = LogoSource::Unreadable {
            path: Path::new("logo.png").to_path_buf(),
            reason: "bad header".to_string(),
        };
        assert!(matches!(
            logo_notice(&unreadable),
            Some(Notice::UnreadableLogo { reason, .. }) if reason == "bad header"
        ));
    }
}
