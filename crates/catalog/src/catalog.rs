use thiserror::Error;

use crate::{FunctionSpec, standard};

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate label: {0}")]
    DuplicateLabel(&'static str),

    #[error("duplicate key: {0}")]
    DuplicateKey(&'static str),

    #[error("catalog must contain at least one entry")]
    Empty,
}

/// An immutable, ordered set of [`FunctionSpec`] entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<FunctionSpec>,
}

impl Catalog {
    /// Builds a catalog from entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty or two entries share a label
    /// or a key.
    pub fn new(entries: impl IntoIterator<Item = FunctionSpec>) -> Result<Self, CatalogError> {
        let mut checked: Vec<FunctionSpec> = Vec::new();

        for spec in entries {
            if checked.iter().any(|other| other.label() == spec.label()) {
                return Err(CatalogError::DuplicateLabel(spec.label()));
            }
            if checked.iter().any(|other| other.key() == spec.key()) {
                return Err(CatalogError::DuplicateKey(spec.key()));
            }
            checked.push(spec);
        }

        if checked.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { entries: checked })
    }

    /// Returns the catalog of standard functions.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: standard::ALL.to_vec(),
        }
    }

    /// Looks up an entry by its display label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&FunctionSpec> {
        self.entries.iter().find(|spec| spec.label() == label)
    }

    /// Looks up an entry by its configuration key, ignoring ASCII case and
    /// surrounding whitespace.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&FunctionSpec> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|spec| spec.key().eq_ignore_ascii_case(key))
    }

    /// Looks up an entry by label, then by key.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FunctionSpec> {
        self.get(name).or_else(|| self.by_key(name))
    }

    /// Returns the first entry, used when nothing is selected.
    #[must_use]
    pub fn default_entry(&self) -> &FunctionSpec {
        // `new` and `standard` both guarantee at least one entry.
        &self.entries[0]
    }

    /// Returns the labels in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(FunctionSpec::label)
    }

    /// Returns the entries in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, FunctionSpec> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; catalogs are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FunctionSpec;
    type IntoIter = std::slice::Iter<'a, FunctionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::standard::{EXPONENTIAL, LOGARITHMIC, POLYNOMIAL, TRIGONOMETRIC};

    #[test]
    fn standard_catalog_keeps_display_order() {
        let catalog = Catalog::standard();
        let labels: Vec<_> = catalog.labels().collect();

        assert_eq!(
            labels,
            vec![
                "Polynomial: x³ - x - 2",
                "Trigonometric: cos(x) - x",
                "Exponential: e^x - 3x",
                "Logarithmic: ln(x) + x² - 3",
            ]
        );
        assert_eq!(catalog.default_entry().key(), "polynomial");
    }

    #[test]
    fn lookups_by_label_and_key() {
        let catalog = Catalog::standard();

        assert_eq!(
            catalog.get("Exponential: e^x - 3x").map(FunctionSpec::key),
            Some("exponential")
        );
        assert_eq!(
            catalog.by_key("logarithmic").map(FunctionSpec::label),
            Some(LOGARITHMIC.label())
        );
        assert_eq!(
            catalog.by_key(" Exponential").map(FunctionSpec::key),
            Some("exponential")
        );
        assert!(catalog.get("exponential").is_none());
        assert!(catalog.by_key("Exponential: e^x - 3x").is_none());
    }

    #[test]
    fn find_accepts_label_or_key() {
        let catalog = Catalog::standard();

        assert_eq!(
            catalog.find("Trigonometric: cos(x) - x").map(FunctionSpec::key),
            Some("trigonometric")
        );
        assert_eq!(
            catalog.find(" Polynomial ").map(FunctionSpec::key),
            Some("polynomial")
        );
        assert!(catalog.find("hyperbolic").is_none());
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Catalog::new([POLYNOMIAL, TRIGONOMETRIC, POLYNOMIAL]).map(|c| c.len()),
            Err(CatalogError::DuplicateLabel(POLYNOMIAL.label()))
        );

        let renamed = FunctionSpec::new("exponential", "Another e^x", |x| Ok(x), |_| Ok(1.0));
        assert_eq!(
            Catalog::new([EXPONENTIAL, renamed]).map(|c| c.len()),
            Err(CatalogError::DuplicateKey("exponential"))
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(
            Catalog::new(Vec::new()).map(|c| c.len()),
            Err(CatalogError::Empty)
        );
    }

    #[test]
    fn custom_catalog_preserves_order() {
        let catalog = Catalog::new([LOGARITHMIC, POLYNOMIAL]).expect("distinct entries");

        let keys: Vec<_> = catalog.iter().map(FunctionSpec::key).collect();
        assert_eq!(keys, vec!["logarithmic", "polynomial"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!((&catalog).into_iter().count(), 2);
    }
}
