// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fatal error taxonomy for release-worldmap.
//!
//! Recoverable conditions (a missing partial-support list, a missing logo,
//! a name the catalog does not know) are not errors. They are modelled as
//! values: see [`crate::input::ListSource`], [`crate::render::LogoSource`]
//! and [`crate::catalog::CountryCatalog::lookup`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// The primary highlighted list or the shapefile is absent.
    #[error("required {what} not found: {}", path.display())]
    RequiredInputMissing { what: &'static str, path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read geometry from {}: {reason}", path.display())]
    Geometry { path: PathBuf, reason: String },

    #[error("rendering failed: {0}")]
    Rendering(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl MapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MapError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the fatal-absence case, as opposed to a read failure on an
    /// existing file.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, MapError::RequiredInputMissing { .. })
    }
}

pub type MapResult<T> = std::result::Result<T, MapError>;
