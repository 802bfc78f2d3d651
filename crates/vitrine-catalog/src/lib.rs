//! Catalog data model for the Vitrine storefront.
//!
//! This crate holds everything the UI layer needs to know about products
//! without knowing anything about rendering:
//!
//! - **Products**: titles, pricing, ratings, stock and shipping flags
//! - **Color variants**: per-product swatches with image overrides
//! - **Catalog**: an ordered, validated product list with by-id lookup
//! - **Formatting**: price, rating and review-count display strings
//!
//! The catalog is constructed once from caller-supplied records (in this
//! build, an embedded JSON fixture) and never mutated afterwards. Lookups
//! are designed to degrade: a missing product or color id yields an empty
//! or omitted display value, never an error.

pub mod catalog;
pub mod error;
pub mod format;
pub mod ids;
pub mod product;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use format::{format_price, format_rating, format_review_count};
pub use ids::{ColorId, ProductId};
pub use product::{CartItem, ColorVariant, Product};
