//! Bounded quantity stepper.

use leptos::prelude::*;

use crate::config::StorefrontConfig;
use crate::icons::{MinusIcon, PlusIcon};

/// Step a quantity down, clamped to `[min, max]`.
///
/// Total for any input; an inverted bound pair is healed by raising `max`
/// to `min`.
pub fn step_down(quantity: u32, min: u32, max: u32) -> u32 {
    quantity.saturating_sub(1).clamp(min, max.max(min))
}

/// Step a quantity up, clamped to `[min, max]`.
pub fn step_up(quantity: u32, min: u32, max: u32) -> u32 {
    quantity.saturating_add(1).clamp(min, max.max(min))
}

/// Controlled stepper over `[min, max]`.
///
/// Holds no state: the parent owns `quantity` and receives every change
/// through `on_change`. Values emitted never leave the bounds; the stepper
/// controls are disabled at them.
#[component]
pub fn QuantitySelector(
    /// Current quantity, owned by the parent.
    #[prop(into)]
    quantity: Signal<u32>,
    /// Receives each stepped value.
    #[prop(into)]
    on_change: Callback<u32>,
    /// Lower bound. Falls back to the configured default.
    #[prop(into, optional)]
    min: Option<u32>,
    /// Upper bound. Falls back to the configured default.
    #[prop(into, optional)]
    max: Option<u32>,
) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let min = min.unwrap_or(config.min_quantity);
    let max = max.unwrap_or(config.max_quantity).max(min);

    view! {
        <div class="quantity-selector">
            <span class="quantity-label">"Qty:"</span>
            <div class="quantity-controls">
                <button
                    class="quantity-step"
                    aria-label="Decrease quantity"
                    disabled=move || quantity.get() <= min
                    on:click=move |_| on_change.run(step_down(quantity.get_untracked(), min, max))
                >
                    <MinusIcon size=14 />
                </button>
                <span class="quantity-value">{move || quantity.get()}</span>
                <button
                    class="quantity-step"
                    aria-label="Increase quantity"
                    disabled=move || quantity.get() >= max
                    on:click=move |_| on_change.run(step_up(quantity.get_untracked(), min, max))
                >
                    <PlusIcon size=14 />
                </button>
            </div>
        </div>
    }
}
