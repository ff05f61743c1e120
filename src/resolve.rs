// SPDX-License-Identifier: PMPL-1.0-or-later

//! Name-variant resolution.
//!
//! Turns the user's country names into the set of spellings the geometry
//! attributes might use. Resolution never fails: a name the catalog does
//! not know stands for itself.

use crate::catalog::CountryCatalog;
use crate::types::VariantSet;
use std::collections::BTreeSet;

/// Canonical comparison form: surrounding whitespace removed, lowercase.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Catalog name plus official name for `name`, or `{name}` when the catalog
/// has no entry. Values are returned as the catalog spells them.
pub fn resolve_variants(catalog: &dyn CountryCatalog, name: &str) -> BTreeSet<String> {
    match catalog.lookup(name) {
        Some(entry) => std::iter::once(entry.name)
            .chain(entry.official_name)
            .filter(|variant| !variant.is_empty())
            .collect(),
        None => BTreeSet::from([name.to_string()]),
    }
}

/// Normalized variants of a single name.
pub fn normalized_variants(catalog: &dyn CountryCatalog, name: &str) -> VariantSet {
    resolve_variants(catalog, name)
        .iter()
        .map(|variant| normalize(variant))
        .filter(|variant| !variant.is_empty())
        .collect()
}

/// Union of the normalized variants of every name in `names`.
pub fn build_normalized_variant_set<'a, I>(catalog: &dyn CountryCatalog, names: I) -> VariantSet
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .flat_map(|name| normalized_variants(catalog, name))
        .collect()
}
