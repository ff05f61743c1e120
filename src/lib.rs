// SPDX-License-Identifier: PMPL-1.0-or-later

//! release-worldmap: draws the world map of countries a release supports.
//!
//! A single batch pipeline:
//! 1. **Input**: the highlighted and partially-supported country lists.
//! 2. **Resolve**: every name is expanded into catalog spellings
//!    (short name and official name) and normalized.
//! 3. **Classify**: each shapefile record is matched on its `ADMIN` and
//!    `SOVEREIGNT` attributes.
//! 4. **Render**: three layers plus a logo and release label, exported as
//!    SVG and PNG.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod input;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod resolve;
pub mod types;

pub use error::{MapError, MapResult};
