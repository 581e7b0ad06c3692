use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::model::Listing;
use crate::error::HouseHuntError;
use crate::HouseHuntResult;

const SAMPLE_CATALOG_JSON: &str = include_str!("../../data/sample_catalog.json");

/// A validated, ordered set of listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog from listings, validating each record.
    pub fn new(listings: Vec<Listing>) -> HouseHuntResult<Self> {
        let catalog = Catalog { listings };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from its JSON form.
    pub fn from_json_str(json: &str) -> HouseHuntResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!("loaded catalog with {} listings", catalog.listings.len());
        Ok(catalog)
    }

    /// The bundled three-listing Brooklyn catalog.
    pub fn sample() -> HouseHuntResult<Self> {
        Self::from_json_str(SAMPLE_CATALOG_JSON)
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.listings.iter().map(|l| l.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn validate(&self) -> HouseHuntResult<()> {
        validate_listings(&self.listings)
    }
}

/// Validate every record and require unique, non-empty identifiers.
pub fn validate_listings(listings: &[Listing]) -> HouseHuntResult<()> {
    if listings.is_empty() {
        return Err(HouseHuntError::InvalidInput {
            field: "listings".into(),
            reason: "Catalog must contain at least one listing".into(),
        });
    }

    let mut seen = HashSet::new();
    for listing in listings {
        listing.validate()?;
        if !seen.insert(listing.id.as_str()) {
            return Err(HouseHuntError::InvalidInput {
                field: "id".into(),
                reason: format!("Duplicate listing identifier '{}'", listing.id),
            });
        }
    }
    Ok(())
}
