// SPDX-License-Identifier: PMPL-1.0-or-later

//! PNG export through resvg.

use crate::error::{MapError, MapResult};
use resvg::{tiny_skia, usvg};

/// Rasterize `svg` to a `width` x `height` image and return it PNG-encoded.
///
/// System fonts are loaded so the version label renders; when none are
/// installed the label is simply missing from the PNG (the SVG keeps it).
pub fn encode_png(svg: &str, width: u32, height: u32) -> MapResult<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| MapError::Rendering(format!("parsing generated SVG: {}", err)))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        MapError::Rendering(format!("cannot allocate a {}x{} pixmap", width, height))
    })?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| MapError::Rendering(format!("encoding PNG: {}", err)))
}
