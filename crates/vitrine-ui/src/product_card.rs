//! Product card: image, pricing, selection controls, add-to-cart flow.

use leptos::prelude::*;
use leptos::task;

use vitrine_catalog::{format_price, ColorId, Product, ProductId};

use crate::color_variants::ColorVariants;
use crate::config::StorefrontConfig;
use crate::icons::{HeartIcon, ShoppingCartIcon, TruckIcon, ZapIcon};
use crate::quantity_selector::QuantitySelector;
use crate::star_rating::StarRating;
use crate::timing::sleep;

/// Interactive state owned by one rendered card.
///
/// Never shared across cards; each instance steps its own quantity and
/// color independently of every other card on the grid.
#[derive(Debug, Clone, Copy)]
pub struct CardState {
    /// Quantity chosen in the stepper.
    pub quantity: RwSignal<u32>,
    /// Selected color id; empty when the product has no variants.
    pub selected_color: RwSignal<ColorId>,
    /// Wishlist heart toggle.
    pub wishlisted: RwSignal<bool>,
    /// Reentrancy guard for the add-to-cart flow.
    pub adding_to_cart: RwSignal<bool>,
}

impl CardState {
    /// Create the signal set for one card instance.
    pub fn install(product: &Product, config: &StorefrontConfig) -> Self {
        Self {
            quantity: RwSignal::new(config.min_quantity),
            selected_color: RwSignal::new(product.default_color()),
            wishlisted: RwSignal::new(false),
            adding_to_cart: RwSignal::new(false),
        }
    }
}

/// Start an add-to-cart submission, flagging the card as busy.
///
/// The quantity and color are snapshotted here, at click time; swatch and
/// stepper edits made while the submission is in flight do not alter what
/// gets reported. Returns `None` without side effect when the product is
/// out of stock or a submission is already in flight. The disabled
/// control is the first gate; this guard holds even when the handler is
/// invoked directly.
pub fn begin_add_to_cart(state: CardState, in_stock: bool) -> Option<(u32, ColorId)> {
    if !in_stock || state.adding_to_cart.get_untracked() {
        return None;
    }
    state.adding_to_cart.set(true);
    Some((
        state.quantity.get_untracked(),
        state.selected_color.get_untracked(),
    ))
}

/// Clear the in-flight flag once a submission completes.
///
/// Safe to call after the owning card has been torn down.
pub fn finish_add_to_cart(state: CardState) {
    let _ = state.adding_to_cart.try_set(false);
}

/// Flip the wishlist flag.
pub fn toggle_wishlist(wishlisted: RwSignal<bool>) {
    wishlisted.update(|value| *value = !*value);
}

/// One product on the storefront grid.
///
/// The card owns its selection state and reports completed add-to-cart
/// submissions upward as a `(product_id, quantity, selected_color)`
/// triple, captured at the moment the add control is clicked. Out-of-stock
/// products still render fully, with an overlay and a disabled add
/// control.
#[component]
pub fn ProductCard(
    /// Product to display.
    product: Product,
    /// Receives the submission triple after the simulated delay.
    #[prop(into)]
    on_add_to_cart: Callback<(ProductId, u32, ColorId)>,
) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let state = CardState::install(&product, &config);

    let in_stock = product.in_stock;
    let discount = product.discount_percentage();
    let add_delay_ms = config.add_to_cart_delay_ms;

    let image_product = product.clone();
    let current_image = move || {
        image_product
            .image_for(&state.selected_color.get())
            .to_string()
    };

    let submit_id = product.id.clone();
    let handle_add_to_cart = move |_| {
        let Some((quantity, selected_color)) = begin_add_to_cart(state, in_stock) else {
            return;
        };
        let product_id = submit_id.clone();
        task::spawn_local(async move {
            sleep(add_delay_ms).await;
            // A card torn down mid-flight drops the submission.
            if state.adding_to_cart.try_get_untracked().is_none() {
                return;
            }
            on_add_to_cart.run((product_id, quantity, selected_color));
            finish_add_to_cart(state);
        });
    };

    view! {
        <div class="product-card">
            <div class="product-image-wrap">
                <img class="product-image" src=current_image alt=product.title.clone() />
                <div class="card-badges">
                    {(discount > 0)
                        .then(|| {
                            view! {
                                <span class="badge badge-discount">{format!("-{discount}%")}</span>
                            }
                        })}
                    {product
                        .fast_delivery
                        .then(|| {
                            view! {
                                <span class="badge badge-fast">
                                    <ZapIcon size=10 />
                                    <span>"Fast"</span>
                                </span>
                            }
                        })}
                </div>
                <button
                    class=move || {
                        if state.wishlisted.get() {
                            "wishlist-button wishlisted"
                        } else {
                            "wishlist-button"
                        }
                    }
                    aria-label=move || {
                        if state.wishlisted.get() {
                            "Remove from wishlist"
                        } else {
                            "Add to wishlist"
                        }
                    }
                    on:click=move |_| toggle_wishlist(state.wishlisted)
                >
                    <HeartIcon size=16 />
                </button>
                {(!in_stock)
                    .then(|| {
                        view! {
                            <div class="stock-overlay">
                                <span class="stock-overlay-label">"Out of Stock"</span>
                            </div>
                        }
                    })}
            </div>
            <div class="product-body">
                <h3 class="product-title">{product.title.clone()}</h3>
                <StarRating rating=product.rating size=14 review_count=product.review_count />
                <p class="product-description">{product.description.clone()}</p>
                <div class="price-row">
                    <span class="price-current">
                        {format_price(product.price, &config.currency_symbol)}
                    </span>
                    {product
                        .original_price
                        .map(|original| {
                            view! {
                                <span class="price-original">
                                    {format_price(original, &config.currency_symbol)}
                                </span>
                            }
                        })}
                </div>
                {product
                    .free_shipping
                    .then(|| {
                        view! {
                            <div class="free-shipping">
                                <TruckIcon size=14 />
                                <span>"Free Shipping"</span>
                            </div>
                        }
                    })}
                <ColorVariants
                    colors=product.colors.clone()
                    selected=state.selected_color
                    on_select=Callback::new(move |color: ColorId| state.selected_color.set(color))
                />
                <QuantitySelector
                    quantity=state.quantity
                    on_change=Callback::new(move |value: u32| state.quantity.set(value))
                />
                <button
                    class="add-to-cart-button"
                    class:adding=move || state.adding_to_cart.get()
                    disabled=move || !in_stock || state.adding_to_cart.get()
                    on:click=handle_add_to_cart
                >
                    <ShoppingCartIcon size=16 class="add-to-cart-icon" />
                    <span>
                        {move || {
                            if state.adding_to_cart.get() { "Adding..." } else { "Add to Cart" }
                        }}
                    </span>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::ColorVariant;

    fn fixture_product(in_stock: bool) -> Product {
        Product {
            id: ProductId::new("1"),
            title: "Wireless Headphones".to_string(),
            description: "Crystal-clear audio.".to_string(),
            price: 199.99,
            original_price: Some(299.99),
            rating: 4.5,
            review_count: 2847,
            image: "https://example.com/base.jpg".to_string(),
            colors: vec![
                ColorVariant {
                    id: ColorId::new("black"),
                    name: "Midnight Black".to_string(),
                    color: "#1a1a1a".to_string(),
                    image: "https://example.com/black.jpg".to_string(),
                },
                ColorVariant {
                    id: ColorId::new("blue"),
                    name: "Ocean Blue".to_string(),
                    color: "#3b82f6".to_string(),
                    image: "https://example.com/blue.jpg".to_string(),
                },
            ],
            in_stock,
            fast_delivery: true,
            free_shipping: true,
        }
    }

    #[test]
    fn test_card_state_initial_values() {
        let product = fixture_product(true);
        let state = CardState::install(&product, &StorefrontConfig::default());

        assert_eq!(state.quantity.get_untracked(), 1);
        assert_eq!(state.selected_color.get_untracked().as_str(), "black");
        assert!(!state.wishlisted.get_untracked());
        assert!(!state.adding_to_cart.get_untracked());
    }

    #[test]
    fn test_card_state_empty_color_without_variants() {
        let mut product = fixture_product(true);
        product.colors.clear();

        let state = CardState::install(&product, &StorefrontConfig::default());

        assert!(state.selected_color.get_untracked().is_empty());
    }

    #[test]
    fn test_begin_add_to_cart_snapshots_selection() {
        let product = fixture_product(true);
        let state = CardState::install(&product, &StorefrontConfig::default());
        state.quantity.set(3);

        let captured = begin_add_to_cart(state, product.in_stock);

        assert_eq!(captured, Some((3, ColorId::new("black"))));
        assert!(state.adding_to_cart.get_untracked());
    }

    #[test]
    fn test_begin_add_to_cart_rejects_while_in_flight() {
        let product = fixture_product(true);
        let state = CardState::install(&product, &StorefrontConfig::default());

        assert!(begin_add_to_cart(state, product.in_stock).is_some());
        assert!(begin_add_to_cart(state, product.in_stock).is_none());
        assert!(state.adding_to_cart.get_untracked());
    }

    #[test]
    fn test_begin_add_to_cart_rejects_out_of_stock() {
        let product = fixture_product(false);
        let state = CardState::install(&product, &StorefrontConfig::default());

        assert!(begin_add_to_cart(state, product.in_stock).is_none());
        assert!(!state.adding_to_cart.get_untracked());
    }

    #[test]
    fn test_finish_add_to_cart_clears_guard() {
        let product = fixture_product(true);
        let state = CardState::install(&product, &StorefrontConfig::default());
        state.adding_to_cart.set(true);

        finish_add_to_cart(state);

        assert!(!state.adding_to_cart.get_untracked());
    }

    #[test]
    fn test_toggle_wishlist_flips() {
        let wishlisted = RwSignal::new(false);

        toggle_wishlist(wishlisted);
        assert!(wishlisted.get_untracked());

        toggle_wishlist(wishlisted);
        assert!(!wishlisted.get_untracked());
    }

    #[test]
    fn test_submission_captures_selection_at_click() {
        let product = fixture_product(true);
        let state = CardState::install(&product, &StorefrontConfig::default());
        let captured = RwSignal::new(Vec::<(ProductId, u32, ColorId)>::new());
        let on_add_to_cart =
            Callback::new(move |triple| captured.update(|calls| calls.push(triple)));

        state.quantity.set(2);
        let (quantity, selected_color) = begin_add_to_cart(state, product.in_stock).unwrap();

        // Swatch and stepper stay live during the delay; the in-flight
        // submission keeps the click-time selection.
        state.selected_color.set(ColorId::new("blue"));
        state.quantity.set(5);

        on_add_to_cart.run((product.id.clone(), quantity, selected_color));
        finish_add_to_cart(state);

        let calls = captured.get_untracked();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (ProductId::new("1"), 2, ColorId::new("black")));
        assert!(!state.adding_to_cart.get_untracked());
    }

    #[test]
    fn test_image_follows_selected_color() {
        let product = fixture_product(true);
        let state = CardState::install(&product, &StorefrontConfig::default());

        assert_eq!(
            product.image_for(&state.selected_color.get_untracked()),
            "https://example.com/black.jpg"
        );

        state.selected_color.set(ColorId::new("blue"));

        assert_eq!(
            product.image_for(&state.selected_color.get_untracked()),
            "https://example.com/blue.jpg"
        );
    }
}
