// SPDX-License-Identifier: PMPL-1.0-or-later

//! Winkel Tripel projection on the unit sphere.
//!
//! Standard parallel is `acos(2/π)` (about 50.46°), the same default PROJ
//! uses for `+proj=wintri`. Output units are radians-on-the-unit-sphere;
//! the renderer rescales to the canvas anyway.

use geo::{Coord, MapCoords, MultiPolygon};
use std::f64::consts::PI;

/// Project a lon/lat coordinate given in degrees.
pub fn winkel_tripel(coord: Coord<f64>) -> Coord<f64> {
    let lambda = coord.x.to_radians();
    let phi = coord.y.to_radians();
    let cos_phi1 = 2.0 / PI;

    let alpha = (phi.cos() * (lambda / 2.0).cos()).clamp(-1.0, 1.0).acos();
    // unnormalized sinc
    let sinc_alpha = if alpha.abs() < 1e-12 {
        1.0
    } else {
        alpha.sin() / alpha
    };

    Coord {
        x: 0.5 * (lambda * cos_phi1 + 2.0 * phi.cos() * (lambda / 2.0).sin() / sinc_alpha),
        y: 0.5 * (phi + phi.sin() / sinc_alpha),
    }
}

pub fn project_shape(shape: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    shape.map_coords(winkel_tripel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn origin_is_fixed() {
        let p = winkel_tripel(Coord { x: 0.0, y: 0.0 });
        assert!(close(p.x, 0.0) && close(p.y, 0.0));
    }

    #[test]
    fn symmetric_about_both_axes() {
        let p = winkel_tripel(Coord { x: 40.0, y: 25.0 });
        let q = winkel_tripel(Coord { x: -40.0, y: -25.0 });
        assert!(close(p.x, -q.x));
        assert!(close(p.y, -q.y));
    }

    #[test]
    fn equator_edge() {
        let p = winkel_tripel(Coord { x: 180.0, y: 0.0 });
        assert!(close(p.x, 0.5 * (2.0 + PI)));
        assert!(close(p.y, 0.0));
    }

    #[test]
    fn pole_is_finite() {
        let p = winkel_tripel(Coord { x: 0.0, y: 90.0 });
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(close(p.y, PI / 2.0));
    }
}
