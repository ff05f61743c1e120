// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country reference catalog.
//!
//! The resolver only needs one capability from a catalog: given a free-text
//! country name, return the catalog's canonical name and, when it has one,
//! the official name. [`CountryCatalog`] is that seam; [`Iso3166Catalog`] is
//! the embedded implementation used by the binary, and tests plug in stubs.

mod iso3166;

pub use iso3166::{Iso3166Entry, COUNTRIES};

/// What a successful lookup yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: String,
    pub official_name: Option<String>,
}

impl CountryEntry {
    pub fn new(name: impl Into<String>, official_name: Option<&str>) -> Self {
        Self {
            name: name.into(),
            official_name: official_name.map(str::to_string),
        }
    }
}

pub trait CountryCatalog {
    /// `None` means the name is unknown to the catalog. Callers fall back to
    /// the literal name; this is never an error.
    fn lookup(&self, name: &str) -> Option<CountryEntry>;
}

/// Embedded ISO 3166-1 catalog.
///
/// Matching is case-insensitive and exact against the alpha-2, alpha-3 and
/// numeric codes, the short name, the official name and the common name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166Catalog;

impl Iso3166Catalog {
    pub fn new() -> Self {
        Self
    }

    pub fn find(&self, name: &str) -> Option<&'static Iso3166Entry> {
        let wanted = name.to_lowercase();
        COUNTRIES
            .iter()
            .find(|entry| entry.keys().any(|key| key.to_lowercase() == wanted))
    }
}

impl CountryCatalog for Iso3166Catalog {
    fn lookup(&self, name: &str) -> Option<CountryEntry> {
        self.find(name)
            .map(|entry| CountryEntry::new(entry.name, entry.official_name))
    }
}
