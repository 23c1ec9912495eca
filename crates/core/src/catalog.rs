//! The fixed pass catalog.
//!
//! A catalog is an ordered list of exactly [`CATALOG_SIZE`] passes with
//! distinct, non-empty IDs. It is validated once at construction and is
//! read-only afterwards.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::{Pass, PassId};

/// Number of passes in a catalog.
pub const CATALOG_SIZE: usize = 5;

/// An immutable, validated list of passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    passes: Vec<Pass>,
}

impl Catalog {
    /// Build a catalog from an ordered list of passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not have exactly [`CATALOG_SIZE`]
    /// entries, or if any ID is empty or repeated.
    pub fn new(passes: Vec<Pass>) -> Result<Self, CatalogError> {
        if passes.len() != CATALOG_SIZE {
            return Err(CatalogError::WrongSize {
                expected: CATALOG_SIZE,
                found: passes.len(),
            });
        }

        let mut seen = HashSet::with_capacity(passes.len());
        for pass in &passes {
            if pass.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(pass.id.as_str()) {
                return Err(CatalogError::DuplicateId(pass.id.to_string()));
            }
        }

        Ok(Self { passes })
    }

    /// Parse a catalog from a JSON array of passes.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, or any validation
    /// error from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let passes: Vec<Pass> = serde_json::from_str(json)?;
        Self::new(passes)
    }

    /// Look up a pass by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Pass> {
        self.passes.iter().find(|p| p.id.as_str() == id)
    }

    /// Whether `id` names a pass in this catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Passes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Pass> {
        self.passes.iter()
    }

    /// Pass IDs in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &PassId> {
        self.passes.iter().map(|p| &p.id)
    }

    /// Number of passes (always [`CATALOG_SIZE`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Always `false`; a valid catalog is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for Catalog {
    /// The five built-in birthday passes.
    fn default() -> Self {
        Self {
            passes: vec![
                Pass::new(
                    "argument-immunity",
                    "Argument Immunity Pass",
                    "You automatically win the argument. I must agree \u{2014} no debates.",
                    "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?q=80&w=1200&auto=format&fit=crop",
                ),
                Pass::new(
                    "food-treat",
                    "Food Treat Pass",
                    "Take me to my fav food or order it instantly \u{2014} fries and savoury first.",
                    "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1200&auto=format&fit=crop",
                ),
                Pass::new(
                    "movie-night",
                    "Movie Night Pass",
                    "One stupid/fun movie night (or we pretend to). You pick the place.",
                    "https://images.unsplash.com/photo-1517604931442-7fbc9a9f5d2b?q=80&w=1200&auto=format&fit=crop",
                ),
                Pass::new(
                    "chore-pass",
                    "Make Me Do Your Chore Pass",
                    "I\u{2019}ll do one chore you pick. Loudly complain while I do it.",
                    "https://images.unsplash.com/photo-1484981184820-2e84ea0e2b6f?q=80&w=1200&auto=format&fit=crop",
                ),
                Pass::new(
                    "visit-home",
                    "I Will Visit Your Home Pass",
                    "I will come to your home \u{2014} for my peace and your happiness. Bring snacks.",
                    "https://images.unsplash.com/photo-1505691723518-36a6b845f0b6?q=80&w=1200&auto=format&fit=crop",
                ),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pass;
    type IntoIter = std::slice::Iter<'a, Pass>;

    fn into_iter(self) -> Self::IntoIter {
        self.passes.iter()
    }
}
