//! Product and color-variant data models.

use serde::{Deserialize, Serialize};

use crate::ids::{ColorId, ProductId};

/// A product shown on the storefront grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier within the catalog.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Short marketing description.
    pub description: String,
    /// Current price, in major currency units.
    pub price: f64,
    /// Pre-discount price. When present and higher than `price`, the card
    /// shows a discount badge and the struck-through original.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Average rating, expected range 0.0–5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Default display image URL.
    pub image: String,
    /// Color variants in display order. May be empty.
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    /// Whether the purchase action is available.
    pub in_stock: bool,
    /// Show the fast-delivery badge.
    #[serde(default)]
    pub fast_delivery: bool,
    /// Show the free-shipping row.
    #[serde(default)]
    pub free_shipping: bool,
}

impl Product {
    /// Discount percentage derived from `original_price`, rounded to the
    /// nearest whole percent. Zero when there is no original price or the
    /// original does not exceed the current price.
    pub fn discount_percentage(&self) -> u8 {
        let Some(original) = self.original_price else {
            return 0;
        };
        if original <= 0.0 {
            return 0;
        }
        let percentage = ((original - self.price) / original * 100.0).round();
        if percentage > 0.0 { percentage as u8 } else { 0 }
    }

    /// Whether the discount badge should be shown.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percentage() > 0
    }

    /// Image to display for the given color selection, falling back to the
    /// product's base image when the id matches no variant.
    pub fn image_for(&self, color: &ColorId) -> &str {
        self.colors
            .iter()
            .find(|variant| &variant.id == color)
            .map_or(self.image.as_str(), |variant| variant.image.as_str())
    }

    /// Display name of the given color variant, if it exists.
    pub fn color_name(&self, color: &ColorId) -> Option<&str> {
        self.colors
            .iter()
            .find(|variant| &variant.id == color)
            .map(|variant| variant.name.as_str())
    }

    /// Default selection: the first color's id, or the empty id when the
    /// product has no variants.
    pub fn default_color(&self) -> ColorId {
        self.colors
            .first()
            .map_or_else(ColorId::default, |variant| variant.id.clone())
    }
}

/// An alternate color/image presentation of one product.
///
/// Variants are owned by their product and have no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Unique within the parent product's color list.
    pub id: ColorId,
    /// Display label, e.g. "Ocean Blue".
    pub name: String,
    /// Swatch fill value, e.g. "#3b82f6".
    pub color: String,
    /// Image shown while this variant is selected.
    pub image: String,
}

/// The shape an external cart collaborator consumes.
///
/// The storefront itself never stores these; the add-to-cart seam reports
/// the same triple through its callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub selected_color: ColorId,
}

impl CartItem {
    /// Create a cart item from the add-to-cart triple.
    pub fn new(product_id: ProductId, quantity: u32, selected_color: ColorId) -> Self {
        Self {
            product_id,
            quantity,
            selected_color,
        }
    }
}
