//! Application shell: header, product grid, confirmation toast.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use vitrine_catalog::{Catalog, CatalogError, ColorId, ProductId};
use vitrine_ui::icons::PackageIcon;
use vitrine_ui::{ProductCard, StorefrontConfig, Toast};

const CATALOG_FIXTURE_JSON: &str = include_str!("../fixtures/catalog.json");

/// Parse the embedded sample catalog.
///
/// # Errors
///
/// Returns an error when the fixture fails to parse or validate; the app
/// shell renders it as an inline panel instead of the grid.
pub fn load_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CATALOG_FIXTURE_JSON)
}

/// Build the confirmation line shown after an add-to-cart submission.
///
/// `Added {quantity}x {title} to cart!`, with the human-readable color
/// name in parentheses when the selected color maps to a named variant.
/// An id missing from the catalog produces an empty title rather than a
/// panic.
pub fn confirmation_message(
    catalog: &Catalog,
    product_id: &ProductId,
    quantity: u32,
    color_id: &ColorId,
) -> String {
    let product = catalog.get(product_id);
    let title = product.map_or("", |found| found.title.as_str());
    let color_name = product
        .and_then(|found| found.color_name(color_id))
        .filter(|name| !name.is_empty());

    match color_name {
        Some(name) => format!("Added {quantity}x {title} ({name}) to cart!"),
        None => format!("Added {quantity}x {title} to cart!"),
    }
}

/// Storefront root: catalog grid plus the shared confirmation toast.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StorefrontConfig::default();
    provide_context(config.clone());

    match load_catalog() {
        Ok(catalog) => {
            let catalog = Arc::new(catalog);
            let toast_message = RwSignal::new(String::new());
            let toast_visible = RwSignal::new(false);

            let message_catalog = Arc::clone(&catalog);
            let on_add_to_cart = Callback::new(
                move |(product_id, quantity, color_id): (ProductId, u32, ColorId)| {
                    let message =
                        confirmation_message(&message_catalog, &product_id, quantity, &color_id);
                    leptos::logging::log!(
                        "Added to cart: product={product_id} quantity={quantity} color={color_id}"
                    );
                    toast_message.set(message);
                    toast_visible.set(true);
                },
            );

            let cards = catalog
                .products()
                .iter()
                .cloned()
                .map(|product| {
                    view! { <ProductCard product=product on_add_to_cart=on_add_to_cart /> }
                })
                .collect_view();

            view! {
                <Title text=config.store_name.clone() />
                <div class="app">
                    <Header
                        store_name=config.store_name.clone()
                        tagline=config.tagline.clone()
                    />
                    <main class="storefront">
                        <div class="product-grid">{cards}</div>
                    </main>
                    <Footer />
                    <Toast
                        message=toast_message
                        is_visible=toast_visible
                        on_close=move || toast_visible.set(false)
                    />
                </div>
            }
            .into_any()
        }
        Err(error) => {
            leptos::logging::log!("Failed to load catalog: {error}");
            view! {
                <Title text=config.store_name.clone() />
                <div class="app">
                    <Header
                        store_name=config.store_name.clone()
                        tagline=config.tagline.clone()
                    />
                    <main class="storefront">
                        <div class="catalog-error">
                            <p>{format!("Failed to load catalog: {error}")}</p>
                        </div>
                    </main>
                    <Footer />
                </div>
            }
            .into_any()
        }
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(store_name: String, tagline: String) -> impl IntoView {
    view! {
        <header class="store-header">
            <div class="store-brand">
                <span class="store-logo">
                    <PackageIcon size=24 />
                </span>
                <div>
                    <h1 class="store-name">{store_name}</h1>
                    <p class="store-tagline">{tagline}</p>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="store-footer">
            <p>"Modern e-commerce experience with premium design"</p>
        </footer>
    }
}
