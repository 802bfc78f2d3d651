//! Storefront configuration and defaults.

/// Configuration for a Vitrine storefront.
///
/// The app root provides this through context; components fall back to
/// `Default` when no context is present.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Store name shown in the header.
    pub store_name: String,
    /// Tagline shown under the store name.
    pub tagline: String,
    /// Currency symbol prefixed to displayed prices.
    pub currency_symbol: String,
    /// Number of star positions in a rating row.
    pub max_rating: u8,
    /// Lower quantity bound for the stepper.
    pub min_quantity: u32,
    /// Upper quantity bound for the stepper.
    pub max_quantity: u32,
    /// How long the confirmation toast stays up, in milliseconds.
    pub toast_duration_ms: u32,
    /// Simulated submission delay for add-to-cart, in milliseconds.
    pub add_to_cart_delay_ms: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: "Premium Store".to_string(),
            tagline: "Discover amazing products".to_string(),
            currency_symbol: "₹".to_string(),
            max_rating: 5,
            min_quantity: 1,
            max_quantity: 10,
            toast_duration_ms: 3000,
            add_to_cart_delay_ms: 600,
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given store name.
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            ..Default::default()
        }
    }

    /// Set the header tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the currency symbol used for price display.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Set the number of star positions in a rating row.
    pub fn with_max_rating(mut self, max_rating: u8) -> Self {
        self.max_rating = max_rating;
        self
    }

    /// Set the quantity stepper bounds. `max` is raised to `min` when the
    /// pair is inverted.
    pub fn with_quantity_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_quantity = min;
        self.max_quantity = max.max(min);
        self
    }

    /// Set how long the confirmation toast stays up.
    pub fn with_toast_duration_ms(mut self, duration_ms: u32) -> Self {
        self.toast_duration_ms = duration_ms;
        self
    }

    /// Set the simulated add-to-cart submission delay.
    pub fn with_add_to_cart_delay_ms(mut self, delay_ms: u32) -> Self {
        self.add_to_cart_delay_ms = delay_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_config_default() {
        let config = StorefrontConfig::default();

        assert_eq!(config.store_name, "Premium Store");
        assert_eq!(config.tagline, "Discover amazing products");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.max_rating, 5);
        assert_eq!(config.min_quantity, 1);
        assert_eq!(config.max_quantity, 10);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.add_to_cart_delay_ms, 600);
    }

    #[test]
    fn test_storefront_config_new() {
        let config = StorefrontConfig::new("My Store");

        assert_eq!(config.store_name, "My Store");
        assert_eq!(config.max_rating, 5); // Default
    }

    #[test]
    fn test_storefront_config_with_tagline() {
        let config = StorefrontConfig::new("Store").with_tagline("Fresh picks daily");

        assert_eq!(config.tagline, "Fresh picks daily");
    }

    #[test]
    fn test_storefront_config_with_currency_symbol() {
        let config = StorefrontConfig::new("Store").with_currency_symbol("$");

        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_storefront_config_with_quantity_bounds() {
        let config = StorefrontConfig::new("Store").with_quantity_bounds(2, 6);

        assert_eq!(config.min_quantity, 2);
        assert_eq!(config.max_quantity, 6);
    }

    #[test]
    fn test_storefront_config_inverted_bounds_are_raised() {
        let config = StorefrontConfig::new("Store").with_quantity_bounds(5, 2);

        assert_eq!(config.min_quantity, 5);
        assert_eq!(config.max_quantity, 5);
    }

    #[test]
    fn test_storefront_config_builder_chain() {
        let config = StorefrontConfig::new("Outlet")
            .with_tagline("Everything must go")
            .with_currency_symbol("$")
            .with_max_rating(10)
            .with_quantity_bounds(1, 5)
            .with_toast_duration_ms(1500)
            .with_add_to_cart_delay_ms(250);

        assert_eq!(config.store_name, "Outlet");
        assert_eq!(config.tagline, "Everything must go");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.max_rating, 10);
        assert_eq!(config.max_quantity, 5);
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.add_to_cart_delay_ms, 250);
    }

    #[test]
    fn test_storefront_config_clone() {
        let config = StorefrontConfig::new("Store").with_currency_symbol("€");

        let cloned = config.clone();
        assert_eq!(cloned, config);
    }
}
