//! End-to-end add-to-cart flow, exercised natively without a browser.
//!
//! Walks the card-side submission path against the embedded fixture and
//! checks the confirmation message the app composes from the reported
//! triple. The simulated delay is skipped; ordering is covered by the
//! reentrancy guard helpers.

use leptos::prelude::*;

use storefront::app::{confirmation_message, load_catalog};
use vitrine_catalog::{ColorId, ProductId};
use vitrine_ui::{begin_add_to_cart, finish_add_to_cart, CardState, StorefrontConfig};

#[test]
fn add_to_cart_yields_confirmation_with_color_name() {
    let catalog = load_catalog().unwrap();
    let product = catalog.get(&ProductId::new("1")).unwrap().clone();
    let state = CardState::install(&product, &StorefrontConfig::default());
    let captured = RwSignal::new(None::<(ProductId, u32, ColorId)>);
    let on_add_to_cart =
        Callback::new(move |triple: (ProductId, u32, ColorId)| captured.set(Some(triple)));

    state.quantity.set(2);
    state.selected_color.set(ColorId::new("blue"));

    let (quantity, color_id) = begin_add_to_cart(state, product.in_stock).unwrap();
    on_add_to_cart.run((product.id.clone(), quantity, color_id));
    finish_add_to_cart(state);

    let (product_id, quantity, color_id) = captured.get_untracked().unwrap();
    assert_eq!(quantity, 2);
    assert_eq!(color_id, ColorId::new("blue"));

    let message = confirmation_message(&catalog, &product_id, quantity, &color_id);
    assert_eq!(
        message,
        "Added 2x Premium Wireless Bluetooth Headphones with Active Noise \
         Cancellation (Ocean Blue) to cart!"
    );
    assert!(!state.adding_to_cart.get_untracked());
}

#[test]
fn midflight_swatch_click_keeps_the_submitted_color() {
    let catalog = load_catalog().unwrap();
    let product = catalog.get(&ProductId::new("1")).unwrap().clone();
    let state = CardState::install(&product, &StorefrontConfig::default());

    let (quantity, color_id) = begin_add_to_cart(state, product.in_stock).unwrap();
    // Another swatch is clicked while the simulated delay runs.
    state.selected_color.set(ColorId::new("blue"));
    finish_add_to_cart(state);

    assert_eq!(color_id, ColorId::new("black"));
    let message = confirmation_message(&catalog, &product.id, quantity, &color_id);
    assert_eq!(
        message,
        "Added 1x Premium Wireless Bluetooth Headphones with Active Noise \
         Cancellation (Midnight Black) to cart!"
    );
}

#[test]
fn repeat_submission_is_rejected_while_in_flight() {
    let catalog = load_catalog().unwrap();
    let product = catalog.get(&ProductId::new("2")).unwrap().clone();
    let state = CardState::install(&product, &StorefrontConfig::default());

    assert!(begin_add_to_cart(state, product.in_stock).is_some());
    assert!(begin_add_to_cart(state, product.in_stock).is_none());

    finish_add_to_cart(state);
    assert!(begin_add_to_cart(state, product.in_stock).is_some());
}

#[test]
fn out_of_stock_product_rejects_direct_submission() {
    let catalog = load_catalog().unwrap();
    let product = catalog.get(&ProductId::new("3")).unwrap().clone();
    let state = CardState::install(&product, &StorefrontConfig::default());

    assert!(begin_add_to_cart(state, product.in_stock).is_none());
    assert!(!state.adding_to_cart.get_untracked());
}
