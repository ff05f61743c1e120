// SPDX-License-Identifier: PMPL-1.0-or-later

//! Canvas layout: where the map, the logo and the label go.
//!
//! All lengths are in points (1/72 inch), which is also the SVG user unit.

use crate::config::{FigureSettings, POINTS_PER_INCH};
use crate::geometry::winkel_tripel;
use crate::types::GeometryRecord;
use geo::{BoundingRect, Coord, Rect};

/// Logo top edge, as a fraction of map height above the map's top edge.
const LOGO_TOP_OFFSET: f64 = 0.08;
/// Label top edge, as a fraction of map height below the map's top edge.
const LABEL_TOP_OFFSET: f64 = 0.01;

/// Projected bounding box of everything drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Coord<f64>,
    pub max: Coord<f64>,
}

impl Extent {
    /// Whole-globe extent, used when the records carry no geometry.
    pub fn world() -> Self {
        let corner = winkel_tripel(Coord { x: 180.0, y: 90.0 });
        let edge = winkel_tripel(Coord { x: 180.0, y: 0.0 });
        Self {
            min: Coord {
                x: -edge.x,
                y: -corner.y,
            },
            max: Coord {
                x: edge.x,
                y: corner.y,
            },
        }
    }

    pub fn of_records(records: &[GeometryRecord]) -> Self {
        records
            .iter()
            .filter_map(|record| record.shape.bounding_rect())
            .reduce(|a, b| {
                Rect::new(
                    Coord {
                        x: a.min().x.min(b.min().x),
                        y: a.min().y.min(b.min().y),
                    },
                    Coord {
                        x: a.max().x.max(b.max().x),
                        y: a.max().y.max(b.max().y),
                    },
                )
            })
            .filter(|rect| rect.width() > 0.0 && rect.height() > 0.0)
            .map(|rect| Extent {
                min: rect.min(),
                max: rect.max(),
            })
            .unwrap_or_else(Extent::world)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A placed rectangle in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub map: Placement,
    pub logo: Option<Placement>,
    /// Centre x and top y of the version label.
    pub label_anchor: Coord<f64>,
    extent: Extent,
    scale: f64,
}

impl Layout {
    /// `logo_aspect` is width / height of the logo image, when there is one.
    pub fn new(extent: Extent, figure: &FigureSettings, logo_aspect: Option<f64>) -> Self {
        let figure_width = figure.width_in * POINTS_PER_INCH;
        let figure_height = figure.height_in * POINTS_PER_INCH;
        let padding = figure.padding_in * POINTS_PER_INCH;

        let scale = (figure_width / extent.width()).min(figure_height / extent.height());
        let map_width = extent.width() * scale;
        let map_height = extent.height() * scale;

        let header = if logo_aspect.is_some() {
            LOGO_TOP_OFFSET * map_height
        } else {
            0.0
        };
        let canvas_width = map_width + 2.0 * padding;
        let canvas_height = map_height + header + 2.0 * padding;

        let map = Placement {
            x: padding,
            y: padding + header,
            width: map_width,
            height: map_height,
        };

        let logo = logo_aspect.map(|aspect| {
            let height = figure.logo_height_in * POINTS_PER_INCH;
            let width = height * aspect;
            Placement {
                x: canvas_width / 2.0 - width / 2.0,
                y: padding,
                width,
                height,
            }
        });

        Self {
            canvas_width,
            canvas_height,
            map,
            logo,
            label_anchor: Coord {
                x: canvas_width / 2.0,
                y: map.y + LABEL_TOP_OFFSET * map_height,
            },
            extent,
            scale,
        }
    }

    /// Projected coordinate to canvas coordinate.
    pub fn to_canvas(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: self.map.x + (coord.x - self.extent.min.x) * self.scale,
            y: self.map.y + (self.extent.max.y - coord.y) * self.scale,
        }
    }

    /// Raster size for the given DPI, at least one pixel each way.
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let factor = f64::from(dpi) / POINTS_PER_INCH;
        let px = |length: f64| ((length * factor).ceil() as u32).max(1);
        (px(self.canvas_width), px(self.canvas_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(w: f64, h: f64) -> Extent {
        Extent {
            min: Coord { x: 0.0, y: 0.0 },
            max: Coord { x: w, y: h },
        }
    }

    #[test]
    fn wide_extent_fills_figure_width() {
        let figure = FigureSettings::default();
        let layout = Layout::new(extent(4.0, 1.0), &figure, None);
        assert!((layout.map.width - 16.0 * 72.0).abs() < 1e-9);
        assert!((layout.map.height - 16.0 * 72.0 / 4.0).abs() < 1e-9);
        assert!((layout.canvas_width - (16.0 * 72.0 + 2.0 * 7.2)).abs() < 1e-9);
        assert!(layout.logo.is_none());
    }

    #[test]
    fn logo_adds_header_band() {
        let figure = FigureSettings::default();
        let without = Layout::new(extent(2.0, 1.0), &figure, None);
        let with = Layout::new(extent(2.0, 1.0), &figure, Some(2.0));
        assert!(with.canvas_height > without.canvas_height);
        let logo = with.logo.expect("logo placed");
        assert!((logo.x + logo.width / 2.0 - with.canvas_width / 2.0).abs() < 1e-9);
        assert!(logo.y < with.map.y);
    }

    #[test]
    fn y_axis_is_flipped() {
        let layout = Layout::new(extent(2.0, 1.0), &FigureSettings::default(), None);
        let top_left = layout.to_canvas(Coord { x: 0.0, y: 1.0 });
        assert!((top_left.x - layout.map.x).abs() < 1e-9);
        assert!((top_left.y - layout.map.y).abs() < 1e-9);
        let bottom = layout.to_canvas(Coord { x: 0.0, y: 0.0 });
        assert!((bottom.y - (layout.map.y + layout.map.height)).abs() < 1e-9);
    }

    #[test]
    fn empty_records_use_world_extent() {
        assert_eq!(Extent::of_records(&[]), Extent::world());
        assert!(Extent::world().width() > Extent::world().height());
    }

    #[test]
    fn pixel_size_scales_with_dpi() {
        let layout = Layout::new(extent(2.0, 1.0), &FigureSettings::default(), None);
        let (w72, _) = layout.pixel_size(72);
        let (w144, _) = layout.pixel_size(144);
        assert!(w144 >= 2 * w72 - 1);
    }
}
