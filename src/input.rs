// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country-name list loading.
//!
//! Lists are plain UTF-8 text, one country name per line. Absence of a file
//! is reported as [`ListSource::Missing`] so each call site decides whether
//! that is fatal (primary list) or recoverable (partial-support list).

use crate::error::{MapError, MapResult};
use crate::types::CountryNameList;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    AsTyped,
    Lowercase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    Found(CountryNameList),
    Missing(PathBuf),
}

impl ListSource {
    /// Recoverable read: absence becomes an empty list.
    pub fn or_empty(self) -> CountryNameList {
        match self {
            ListSource::Found(names) => names,
            ListSource::Missing(_) => CountryNameList::new(),
        }
    }

    /// Fatal read: absence becomes [`MapError::RequiredInputMissing`].
    pub fn require(self, what: &'static str) -> MapResult<CountryNameList> {
        match self {
            ListSource::Found(names) => Ok(names),
            ListSource::Missing(path) => Err(MapError::RequiredInputMissing { what, path }),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ListSource::Missing(_))
    }
}

pub fn load_list(path: &Path, case: CaseMode) -> MapResult<ListSource> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(ListSource::Missing(path.to_path_buf()))
        }
        Err(err) => return Err(MapError::io(path, err)),
    };
    Ok(ListSource::Found(parse_list(&raw, case)))
}

pub fn parse_list(raw: &str, case: CaseMode) -> CountryNameList {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match case {
            CaseMode::AsTyped => line.to_string(),
            CaseMode::Lowercase => line.to_lowercase(),
        })
        .collect()
}
