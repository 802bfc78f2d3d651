//! Catalog container and fixture loading.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::product::Product;

/// An ordered collection of products, as shown on the storefront grid.
///
/// Order is display order. Lookups by id are linear; catalogs here are
/// fixture-sized, not warehouse-sized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an in-memory product list.
    ///
    /// # Errors
    ///
    /// Returns an error when two products share an id, a product declares
    /// two colors with the same id, or a price/rating is out of range.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from its JSON fixture representation.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON does not match the catalog schema
    /// or the parsed catalog fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        // Ratings are on the storefront's five-star scale.
        const MAX_RATING: f32 = 5.0;

        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            let mut colors = HashSet::new();
            for variant in &product.colors {
                if !colors.insert(&variant.id) {
                    return Err(CatalogError::DuplicateColor {
                        product: product.id.clone(),
                        color: variant.id.as_str().to_string(),
                    });
                }
            }
            if product.price < 0.0
                || product.original_price.is_some_and(|original| original < 0.0)
            {
                return Err(CatalogError::NegativePrice {
                    product: product.id.clone(),
                });
            }
            if !(0.0..=MAX_RATING).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    product: product.id.clone(),
                    rating: product.rating,
                });
            }
        }
        Ok(())
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
