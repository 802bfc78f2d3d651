//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use vitrine_ui::prelude::*;
//! ```

pub use crate::{
    begin_add_to_cart, finish_add_to_cart, CardState, ColorVariants, ProductCard,
    QuantitySelector, StarFill, StarRating, StorefrontConfig, Toast,
};
