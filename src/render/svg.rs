// SPDX-License-Identifier: PMPL-1.0-or-later

//! SVG document assembly.
//!
//! The document is the single source for both outputs: it is written as
//! `world_map.svg` and rasterized for `world_map.png`.

use super::layout::{Layout, Placement};
use super::logo::Logo;
use crate::config::{Color, MapConfig};
use crate::types::{GeometryRecord, Tier};
use geo::{LineString, MultiPolygon};
use quick_xml::escape::escape;
use std::fmt::Write;

const HATCH_ID: &str = "hatch";
const HATCH_SPACING: f64 = 4.0;
const HATCH_WIDTH: f64 = 0.8;
const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

/// Stroke and fill of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub fill: Color,
    pub edge: Color,
    pub edge_width: f64,
    pub hatched: bool,
}

impl LayerStyle {
    pub fn for_tier(tier: Tier, config: &MapConfig) -> Self {
        let colors = &config.colors;
        match tier {
            Tier::Background => LayerStyle {
                fill: colors.country,
                edge: colors.country_edge,
                edge_width: 0.5,
                hatched: false,
            },
            Tier::Highlighted => LayerStyle {
                fill: colors.accent,
                edge: colors.highlight_edge,
                edge_width: 1.2,
                hatched: false,
            },
            Tier::Partial => LayerStyle {
                fill: colors.accent,
                edge: colors.highlight_edge,
                edge_width: 1.5,
                hatched: true,
            },
        }
    }
}

pub struct SvgDocument<'a> {
    layout: &'a Layout,
    config: &'a MapConfig,
    body: String,
}

impl<'a> SvgDocument<'a> {
    pub fn new(layout: &'a Layout, config: &'a MapConfig) -> Self {
        Self {
            layout,
            config,
            body: String::new(),
        }
    }

    /// Draw one layer. Layers must be added in draw order.
    pub fn layer(&mut self, tier: Tier, records: &[&GeometryRecord]) {
        let style = LayerStyle::for_tier(tier, self.config);
        let _ = writeln!(
            self.body,
            r#"<g id="{}" fill="{}" fill-rule="evenodd" stroke="{}" stroke-width="{}" stroke-linejoin="round">"#,
            tier.as_str(),
            style.fill,
            style.edge,
            style.edge_width
        );
        for record in records {
            self.path(record);
        }
        self.body.push_str("</g>\n");

        if style.hatched && !records.is_empty() {
            let _ = writeln!(
                self.body,
                r#"<g id="{}-hatch" fill="url(#{})" fill-rule="evenodd" stroke="none">"#,
                tier.as_str(),
                HATCH_ID
            );
            for record in records {
                self.path(record);
            }
            self.body.push_str("</g>\n");
        }
    }

    pub fn logo(&mut self, logo: &Logo, placement: Placement) {
        let _ = writeln!(
            self.body,
            r#"<image id="logo" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" preserveAspectRatio="xMidYMid meet" xlink:href="{}"/>"#,
            placement.x,
            placement.y,
            placement.width,
            placement.height,
            logo.data_uri()
        );
    }

    /// Bold version label, centred, hanging from the label anchor.
    pub fn label(&mut self, text: &str) {
        let size = self.config.figure.label_size_pt;
        let anchor = self.layout.label_anchor;
        // baseline sits roughly one cap height below the anchor
        let baseline = anchor.y + size * 0.8;
        let _ = writeln!(
            self.body,
            r#"<text id="release-code" x="{:.2}" y="{:.2}" font-family="{}" font-size="{}" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
            anchor.x,
            baseline,
            FONT_FAMILY,
            size,
            self.config.colors.accent,
            escape(text)
        );
    }

    pub fn finish(self) -> String {
        let layout = self.layout;
        let colors = &self.config.colors;
        let mut out = String::with_capacity(self.body.len() + 1024);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w:.2}pt" height="{h:.2}pt" viewBox="0 0 {w:.2} {h:.2}">"#,
            w = layout.canvas_width,
            h = layout.canvas_height
        );
        let _ = writeln!(
            out,
            r#"<defs><pattern id="{id}" patternUnits="userSpaceOnUse" width="{s}" height="{s}" patternTransform="rotate(45)"><line x1="{mid}" y1="0" x2="{mid}" y2="{s}" stroke="{edge}" stroke-width="{lw}"/></pattern></defs>"#,
            id = HATCH_ID,
            s = HATCH_SPACING,
            mid = HATCH_SPACING / 2.0,
            edge = colors.highlight_edge,
            lw = HATCH_WIDTH
        );
        let _ = writeln!(
            out,
            r#"<rect id="canvas" width="100%" height="100%" fill="{}"/>"#,
            colors.background
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn path(&mut self, record: &GeometryRecord) {
        let data = path_data(&record.shape, self.layout);
        if data.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<path data-admin="{}" d="{}"/>"#,
            escape(record.display_name()),
            data
        );
    }
}

fn path_data(shape: &MultiPolygon<f64>, layout: &Layout) -> String {
    let mut data = String::new();
    for polygon in shape.0.iter() {
        ring_data(&mut data, polygon.exterior(), layout);
        for hole in polygon.interiors() {
            ring_data(&mut data, hole, layout);
        }
    }
    data
}

fn ring_data(out: &mut String, ring: &LineString<f64>, layout: &Layout) {
    let mut coords = ring.coords().map(|c| layout.to_canvas(*c));
    let Some(first) = coords.next() else {
        return;
    };
    if !out.is_empty() {
        out.push(' ');
    }
    let _ = write!(out, "M{:.2},{:.2}", first.x, first.y);
    for point in coords {
        let _ = write!(out, " L{:.2},{:.2}", point.x, point.y);
    }
    out.push_str(" Z");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::Extent;
    use geo::{polygon, Coord};

    fn layout() -> Layout {
        Layout::new(
            Extent {
                min: Coord { x: 0.0, y: 0.0 },
                max: Coord { x: 2.0, y: 1.0 },
            },
            &MapConfig::default().figure,
            None,
        )
    }

    fn square(admin: &str) -> GeometryRecord {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
        GeometryRecord::new(admin, admin, MultiPolygon::new(vec![poly]))
    }

    #[test]
    fn admin_names_are_escaped() {
        let layout = layout();
        let config = MapConfig::default();
        let record = square(r#"Cote d'Ivoire & <"x">"#);
        let mut doc = SvgDocument::new(&layout, &config);
        doc.layer(Tier::Background, &[&record]);
        let svg = doc.finish();
        assert!(svg.contains(r#"data-admin="Cote d&apos;Ivoire &amp; &lt;&quot;x&quot;&gt;""#));
    }

    #[test]
    fn hatch_line_sits_inside_its_tile() {
        let svg = SvgDocument::new(&layout(), &MapConfig::default()).finish();
        assert!(svg.contains(r#"<line x1="2" y1="0" x2="2" y2="4""#));
    }

    #[test]
    fn hatch_group_only_for_partial_tier() {
        let layout = layout();
        let config = MapConfig::default();
        let record = square("Brazil");
        let mut doc = SvgDocument::new(&layout, &config);
        doc.layer(Tier::Highlighted, &[&record]);
        doc.layer(Tier::Partial, &[&record]);
        let svg = doc.finish();
        assert!(svg.contains(r#"<g id="highlighted""#));
        assert!(svg.contains(r#"<g id="partial-hatch" fill="url(#hatch)""#));
        assert!(!svg.contains("highlighted-hatch"));
    }

    #[test]
    fn label_uses_accent_colour() {
        let layout = layout();
        let config = MapConfig::default();
        let mut doc = SvgDocument::new(&layout, &config);
        doc.label("v1.0 <rc>");
        let svg = doc.finish();
        assert!(svg.contains(r##"fill="#ff9f0a">v1.0 &lt;rc&gt;</text>"##));
    }

    #[test]
    fn closed_paths_per_ring() {
        let layout = layout();
        let data = path_data(&square("X").shape, &layout);
        assert!(data.starts_with('M'));
        assert!(data.ends_with('Z'));
        assert_eq!(data.matches('M').count(), 1);
    }
}
