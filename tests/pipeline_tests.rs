// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pipeline tests over real files: lists, shapefile, logo, outputs

mod common;

use common::{config_in, write_list, write_shapefile};
use image::{Rgba, RgbaImage};
use release_worldmap::catalog::Iso3166Catalog;
use release_worldmap::geometry::load_records;
use release_worldmap::pipeline::{self, Notice};
use release_worldmap::render::{self, LogoSource};
use release_worldmap::report::{ClassificationReport, ReportOutputFormat};
use release_worldmap::types::Tier;
use release_worldmap::MapError;
use std::fs;
use tempfile::TempDir;

const COUNTRIES: &[(&str, &str, f64, f64)] = &[
    ("Germany", "Germany", 5.0, 47.0),
    ("Venezuela", "Venezuela", -73.0, 0.0),
    ("Brazil", "Brazil", -60.0, -20.0),
    ("Spain", "Spain", -10.0, 36.0),
];

fn workspace() -> (TempDir, release_worldmap::config::MapConfig) {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    write_shapefile(&config.paths.shapefile, COUNTRIES);
    (dir, config)
}

fn tier_of(classified: &pipeline::ClassifiedMap, admin: &str) -> Tier {
    classified
        .iter()
        .find(|(record, _)| record.admin == admin)
        .map(|(_, class)| class.tier())
        .unwrap_or_else(|| panic!("no record {admin}"))
}

#[test]
fn test_shapefile_attributes_are_read() {
    let (_dir, config) = workspace();
    let records = load_records(&config.paths.shapefile).expect("shapefile should load");
    assert_eq!(records.len(), COUNTRIES.len());
    assert_eq!(records[0].admin, "Germany");
    assert_eq!(records[2].sovereign, "Brazil");
    assert_eq!(records[0].shape.0.len(), 1);
}

#[test]
fn test_classify_inputs_with_both_lists() {
    let (_dir, config) = workspace();
    write_list(&config.paths.highlighted, &["Germany", "", "  Brazil  ", "Atlantis"]);
    write_list(&config.paths.partial, &["BRAZIL"]);

    let classified =
        pipeline::classify_inputs(&config, &Iso3166Catalog::new()).expect("classification");
    assert!(classified.notices.is_empty());
    assert_eq!(tier_of(&classified, "Germany"), Tier::Highlighted);
    assert_eq!(tier_of(&classified, "Brazil"), Tier::Partial);
    assert_eq!(tier_of(&classified, "Venezuela"), Tier::Highlighted);
    assert_eq!(tier_of(&classified, "Spain"), Tier::Background);
    assert_eq!(classified.unsupported, vec!["Atlantis".to_string()]);
}

#[test]
fn test_missing_partial_list_is_a_notice() {
    let (_dir, config) = workspace();
    write_list(&config.paths.highlighted, &["Spain"]);

    let classified =
        pipeline::classify_inputs(&config, &Iso3166Catalog::new()).expect("classification");
    assert_eq!(
        classified.notices,
        vec![Notice::MissingPartialList(config.paths.partial.clone())]
    );
    assert!(classified.partial.is_empty());
    assert!(classified.classifications.iter().all(|c| !c.partial));
}

#[test]
fn test_missing_primary_list_is_fatal_and_writes_nothing() {
    let (_dir, config) = workspace();
    let err = pipeline::run(&config, &Iso3166Catalog::new()).unwrap_err();
    assert!(matches!(err, MapError::RequiredInputMissing { .. }));
    assert!(!config.png_path().exists());
    assert!(!config.svg_path().exists());
}

#[test]
fn test_missing_shapefile_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    write_list(&config.paths.highlighted, &["Germany"]);
    let err = pipeline::classify_inputs(&config, &Iso3166Catalog::new()).unwrap_err();
    assert!(err.is_missing_input());
}

#[test]
fn test_render_without_logo_still_writes_both_outputs() {
    let (_dir, config) = workspace();
    write_list(&config.paths.highlighted, &["Germany"]);
    write_list(&config.paths.partial, &["germany"]);

    let outcome = pipeline::run(&config, &Iso3166Catalog::new()).expect("render");
    assert!(matches!(outcome.rendered.logo, LogoSource::Missing(_)));
    assert!(outcome
        .notices()
        .contains(&Notice::MissingLogo(config.paths.logo.clone())));

    let png = fs::read(&outcome.rendered.png_path).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    let svg = fs::read_to_string(&outcome.rendered.svg_path).unwrap();
    assert!(svg.contains(">v0.8.6</text>"));
    assert!(!svg.contains("<image"));

    // Germany is in both lists: drawn in the partial layer and hatched
    let partial_layer = svg
        .split(r#"<g id="partial""#)
        .nth(1)
        .expect("partial layer present");
    assert!(partial_layer.contains(r#"data-admin="Germany""#));
    let highlighted_layer = svg
        .split(r#"<g id="highlighted""#)
        .nth(1)
        .and_then(|rest| rest.split("</g>").next())
        .expect("highlighted layer present");
    assert!(!highlighted_layer.contains("Germany"));
    assert!(svg.contains(r#"<g id="partial-hatch" fill="url(#hatch)""#));
}

#[test]
fn test_render_with_logo_embeds_it() {
    let (_dir, config) = workspace();
    write_list(&config.paths.highlighted, &["Spain"]);
    RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]))
        .save(&config.paths.logo)
        .unwrap();

    let outcome = pipeline::run(&config, &Iso3166Catalog::new()).expect("render");
    assert!(outcome.rendered.logo.logo().is_some());
    assert!(outcome.notices().iter().all(|n| !matches!(n, Notice::MissingLogo(_))));

    let svg = fs::read_to_string(&outcome.rendered.svg_path).unwrap();
    assert!(svg.contains(r#"<image id="logo""#));
    assert!(svg.contains("data:image/png;base64,"));
    assert!(svg.contains(">v0.8.6</text>"));
}

#[test]
fn test_png_size_follows_dpi() {
    let (_dir, mut config) = workspace();
    write_list(&config.paths.highlighted, &["Germany"]);
    let low = pipeline::run(&config, &Iso3166Catalog::new()).expect("render");
    config.figure.dpi = 36;
    let high = pipeline::run(&config, &Iso3166Catalog::new()).expect("render");
    assert!(high.rendered.png_size.0 > low.rendered.png_size.0);

    let decoded = image::open(&high.rendered.png_path).unwrap();
    assert_eq!(decoded.width(), high.rendered.png_size.0);
    assert_eq!(decoded.height(), high.rendered.png_size.1);
}

#[test]
fn test_classification_report_export() {
    let (dir, config) = workspace();
    write_list(&config.paths.highlighted, &["Germany", "Atlantis"]);
    write_list(&config.paths.partial, &["spain"]);

    let classified =
        pipeline::classify_inputs(&config, &Iso3166Catalog::new()).expect("classification");
    let report = ClassificationReport::from_classified(&classified, &config.release_code);
    assert_eq!(report.highlighted, vec!["Germany", "Venezuela"]);
    assert_eq!(report.partial, vec!["Spain"]);
    assert_eq!(report.background, 1);
    assert_eq!(report.unsupported, vec!["Atlantis"]);

    let path = dir.path().join("report.yaml");
    report.save(&path, ReportOutputFormat::for_path(&path)).unwrap();
    let parsed: ClassificationReport =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_failed_png_write_leaves_no_svg_behind() {
    let (_dir, config) = workspace();
    write_list(&config.paths.highlighted, &["Germany"]);
    fs::create_dir_all(config.png_path()).unwrap();

    let err = pipeline::run(&config, &Iso3166Catalog::new()).unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
    assert!(!config.svg_path().exists());
    assert!(!config.png_path().is_file());
}

#[test]
fn test_unsupported_names_survive_a_failed_render() {
    let (_dir, config) = workspace();
    write_list(&config.paths.highlighted, &["Germany", "Atlantis"]);
    fs::create_dir_all(config.png_path()).unwrap();

    let classified =
        pipeline::classify_inputs(&config, &Iso3166Catalog::new()).expect("classification");
    assert_eq!(classified.unsupported, vec!["Atlantis".to_string()]);

    let rendered = render::render(&classified.records, &classified.classifications, &config);
    assert!(rendered.is_err());
    assert!(!config.svg_path().exists());
}
