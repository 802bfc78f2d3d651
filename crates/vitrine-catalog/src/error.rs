//! Error types for catalog loading.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors raised while loading or validating a catalog fixture.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fixture was not valid JSON for the catalog schema.
    #[error("failed to parse catalog fixture: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products in the fixture share the same id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// A product declares two color variants with the same id.
    #[error("duplicate color id '{color}' on product {product}")]
    DuplicateColor { product: ProductId, color: String },

    /// A product carries a negative price or original price.
    #[error("negative price on product {product}")]
    NegativePrice { product: ProductId },

    /// A product's rating falls outside the five-star display range.
    #[error("rating {rating} out of range on product {product}")]
    RatingOutOfRange { product: ProductId, rating: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::DuplicateProduct(ProductId::new("1"));
        assert_eq!(err.to_string(), "duplicate product id in catalog: 1");

        let err = CatalogError::DuplicateColor {
            product: ProductId::new("2"),
            color: "black".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate color id 'black' on product 2"
        );

        let err = CatalogError::RatingOutOfRange {
            product: ProductId::new("3"),
            rating: 6.5,
        };
        assert_eq!(err.to_string(), "rating 6.5 out of range on product 3");
    }
}
