// SPDX-License-Identifier: PMPL-1.0-or-later

//! Logo overlay loading.
//!
//! The logo is optional. Whatever goes wrong while reading it, the map is
//! still drawn; the outcome is reported through [`LogoSource`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, ImageReader};
use std::io::{Cursor, ErrorKind};
use std::path::{Path, PathBuf};

/// A decoded logo, re-encoded as PNG for embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub width: u32,
    pub height: u32,
    png: Vec<u8>,
}

impl Logo {
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogoSource {
    Loaded(Logo),
    Missing(PathBuf),
    Unreadable { path: PathBuf, reason: String },
}

impl LogoSource {
    pub fn logo(&self) -> Option<&Logo> {
        match self {
            LogoSource::Loaded(logo) => Some(logo),
            _ => None,
        }
    }
}

pub fn load_logo(path: &Path) -> LogoSource {
    match decode(path) {
        Ok(logo) => LogoSource::Loaded(logo),
        Err(DecodeFailure::NotFound) => LogoSource::Missing(path.to_path_buf()),
        Err(DecodeFailure::Other(reason)) => LogoSource::Unreadable {
            path: path.to_path_buf(),
            reason,
        },
    }
}

enum DecodeFailure {
    NotFound,
    Other(String),
}

fn decode(path: &Path) -> Result<Logo, DecodeFailure> {
    let reader = ImageReader::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DecodeFailure::NotFound,
        _ => DecodeFailure::Other(err.to_string()),
    })?;
    let image = reader
        .with_guessed_format()
        .map_err(|err| DecodeFailure::Other(err.to_string()))?
        .decode()
        .map_err(|err| DecodeFailure::Other(err.to_string()))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(DecodeFailure::Other("image has no pixels".to_string()));
    }

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|err| DecodeFailure::Other(err.to_string()))?;

    Ok(Logo {
        width: image.width(),
        height: image.height(),
        png,
    })
}
