// SPDX-License-Identifier: PMPL-1.0-or-later

//! Map rendering.
//!
//! Records are split into three layers by [`Classification::tier`] and drawn
//! background first, partial-support last so the hatch is never covered.
//! One SVG document is built and exported twice: as-is and rasterized.

pub mod layout;
pub mod logo;
pub mod raster;
pub mod svg;

pub use layout::{Extent, Layout};
pub use logo::{load_logo, Logo, LogoSource};
pub use svg::{LayerStyle, SvgDocument};

use crate::config::MapConfig;
use crate::error::{MapError, MapResult};
use crate::types::{Classification, GeometryRecord, Tier};
use std::fs;
use std::path::PathBuf;

/// Records grouped by draw tier. Every record lands in exactly one layer.
#[derive(Debug, Default)]
pub struct Layers<'a> {
    pub background: Vec<&'a GeometryRecord>,
    pub highlighted: Vec<&'a GeometryRecord>,
    pub partial: Vec<&'a GeometryRecord>,
}

impl<'a> Layers<'a> {
    pub fn partition(
        records: &'a [GeometryRecord],
        classifications: &[Classification],
    ) -> MapResult<Self> {
        if records.len() != classifications.len() {
            return Err(MapError::Rendering(format!(
                "{} records but {} classifications",
                records.len(),
                classifications.len()
            )));
        }
        let mut layers = Layers::default();
        for (record, class) in records.iter().zip(classifications) {
            layers.get_mut(class.tier()).push(record);
        }
        Ok(layers)
    }

    pub fn get(&self, tier: Tier) -> &[&'a GeometryRecord] {
        match tier {
            Tier::Background => &self.background,
            Tier::Highlighted => &self.highlighted,
            Tier::Partial => &self.partial,
        }
    }

    fn get_mut(&mut self, tier: Tier) -> &mut Vec<&'a GeometryRecord> {
        match tier {
            Tier::Background => &mut self.background,
            Tier::Highlighted => &mut self.highlighted,
            Tier::Partial => &mut self.partial,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMap {
    pub png_path: PathBuf,
    pub svg_path: PathBuf,
    pub png_size: (u32, u32),
    pub logo: LogoSource,
}

/// Build the SVG document for already-projected records.
pub fn build_svg(
    records: &[GeometryRecord],
    classifications: &[Classification],
    config: &MapConfig,
    logo: Option<&Logo>,
) -> MapResult<(String, Layout)> {
    let layers = Layers::partition(records, classifications)?;
    let layout = Layout::new(
        Extent::of_records(records),
        &config.figure,
        logo.map(Logo::aspect),
    );

    let mut document = SvgDocument::new(&layout, config);
    for tier in Tier::all() {
        document.layer(tier, layers.get(tier));
    }
    if let (Some(logo), Some(placement)) = (logo, layout.logo) {
        document.logo(logo, placement);
    }
    document.label(&config.release_code);
    let svg = document.finish();
    Ok((svg, layout))
}

/// Draw the map and write `world_map.svg` and `world_map.png` into the
/// configured output directory.
///
/// The PNG is encoded before anything touches the disk. If either write
/// fails, the file already written is removed so the outputs never exist
/// apart.
pub fn render(
    records: &[GeometryRecord],
    classifications: &[Classification],
    config: &MapConfig,
) -> MapResult<RenderedMap> {
    let logo = load_logo(&config.paths.logo);
    let (svg, layout) = build_svg(records, classifications, config, logo.logo())?;
    let (width, height) = layout.pixel_size(config.figure.dpi);
    let png = raster::encode_png(&svg, width, height)?;

    let output_dir = &config.paths.output_dir;
    fs::create_dir_all(output_dir).map_err(|err| MapError::io(output_dir, err))?;

    let png_path = config.png_path();
    let svg_path = config.svg_path();
    fs::write(&png_path, &png).map_err(|err| MapError::io(&png_path, err))?;
    if let Err(err) = fs::write(&svg_path, &svg) {
        let _ = fs::remove_file(&png_path);
        return Err(MapError::io(&svg_path, err));
    }

    Ok(RenderedMap {
        png_path,
        svg_path,
        png_size: (width, height),
        logo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, MultiPolygon};

    fn record(name: &str) -> GeometryRecord {
        GeometryRecord::new(name, name, MultiPolygon::new(vec![]))
    }

    #[test]
    fn partition_is_disjoint_and_uses_precedence() {
        let records = vec![record("A"), record("B"), record("C"), record("D")];
        let classes = vec![
            Classification::default(),
            Classification {
                highlighted: true,
                partial: false,
            },
            Classification {
                highlighted: true,
                partial: true,
            },
            Classification {
                highlighted: false,
                partial: true,
            },
        ];
        let layers = Layers::partition(&records, &classes).unwrap();
        let names = |tier: Tier| {
            layers
                .get(tier)
                .iter()
                .map(|r| r.admin.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(Tier::Background), vec!["A"]);
        assert_eq!(names(Tier::Highlighted), vec!["B"]);
        assert_eq!(names(Tier::Partial), vec!["C", "D"]);
    }

    #[test]
    fn layers_are_drawn_background_first_partial_last() {
        let shaped = |name: &str| {
            GeometryRecord::new(
                name,
                name,
                MultiPolygon::new(vec![polygon![
                    (x: 0.0, y: 0.0),
                    (x: 1.0, y: 0.0),
                    (x: 1.0, y: 1.0),
                    (x: 0.0, y: 1.0),
                ]]),
            )
        };
        let records = vec![shaped("Brazil"), shaped("Spain"), shaped("Chad")];
        let classes = vec![
            Classification {
                highlighted: true,
                partial: true,
            },
            Classification {
                highlighted: true,
                partial: false,
            },
            Classification::default(),
        ];
        let (svg, _) = build_svg(&records, &classes, &MapConfig::default(), None).unwrap();

        let position = |tag: &str| {
            svg.find(tag)
                .unwrap_or_else(|| panic!("{tag} missing from document"))
        };
        let background = position(r#"<g id="background""#);
        let highlighted = position(r#"<g id="highlighted""#);
        let partial = position(r#"<g id="partial""#);
        let hatch = position(r#"<g id="partial-hatch""#);
        let label = position(r#"<text id="release-code""#);
        assert!(background < highlighted);
        assert!(highlighted < partial);
        assert!(partial < hatch);
        assert!(hatch < label);
    }

    #[test]
    fn partition_rejects_length_mismatch() {
        let records = vec![record("A")];
        assert!(Layers::partition(&records, &[]).is_err());
    }
}
