//! Leptos components for the Vitrine storefront.
//!
//! The components mirror the storefront's card anatomy, leaf-first:
//!
//! ```text
//! ProductCard
//! ├── StarRating        rating row under the title
//! ├── ColorVariants     swatch picker (2+ colors only)
//! └── QuantitySelector  bounded stepper
//! Toast                 transient cart confirmation (app level)
//! ```
//!
//! All components are presentational: they own only their instance-local
//! state and report everything else upward through `Callback` props. Shared
//! defaults (currency symbol, quantity bounds, timer durations) come from a
//! [`StorefrontConfig`] provided through context, with `Default` as the
//! fallback so each component stays usable standalone.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vitrine_ui::prelude::*;
//!
//! provide_context(StorefrontConfig::new("Premium Store"));
//!
//! view! {
//!     <ProductCard product=product on_add_to_cart=on_add_to_cart />
//! }
//! ```

pub mod color_variants;
pub mod config;
pub mod icons;
pub mod prelude;
pub mod product_card;
pub mod quantity_selector;
pub mod star_rating;
pub mod timing;
pub mod toast;

pub use color_variants::ColorVariants;
pub use config::StorefrontConfig;
pub use product_card::{begin_add_to_cart, finish_add_to_cart, CardState, ProductCard};
pub use quantity_selector::QuantitySelector;
pub use star_rating::{StarFill, StarRating};
pub use toast::Toast;
