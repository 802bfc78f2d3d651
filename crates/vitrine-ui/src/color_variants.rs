//! Color swatch picker.

use leptos::prelude::*;

use vitrine_catalog::{ColorId, ColorVariant};

/// Accessible label for one swatch control.
pub fn swatch_label(name: &str) -> String {
    format!("Select {name} color")
}

/// Whether the picker renders at all. One option is no choice.
pub fn shows_picker(colors: &[ColorVariant]) -> bool {
    colors.len() > 1
}

/// Swatch row for a product's color variants.
///
/// Renders nothing for zero or one variants. Selection lives in the
/// parent; clicking a swatch only reports the variant's id through
/// `on_select`.
#[component]
pub fn ColorVariants(
    /// Variants in display order.
    colors: Vec<ColorVariant>,
    /// Currently selected color id, owned by the parent.
    #[prop(into)]
    selected: Signal<ColorId>,
    /// Receives the clicked variant's id.
    #[prop(into)]
    on_select: Callback<ColorId>,
) -> impl IntoView {
    shows_picker(&colors).then(|| {
        view! {
            <div class="color-variants">
                <span class="color-label">"Color:"</span>
                <div class="color-swatches">
                    {colors
                        .into_iter()
                        .map(|variant| {
                            let swatch_id = variant.id.clone();
                            let click_id = variant.id.clone();
                            let ring_id = variant.id;
                            view! {
                                <button
                                    class=move || {
                                        if selected.get() == swatch_id {
                                            "color-swatch selected"
                                        } else {
                                            "color-swatch"
                                        }
                                    }
                                    style:background-color=variant.color
                                    title=variant.name.clone()
                                    aria-label=swatch_label(&variant.name)
                                    on:click=move |_| on_select.run(click_id.clone())
                                >
                                    {move || {
                                        (selected.get() == ring_id)
                                            .then(|| view! { <span class="color-swatch-ring"></span> })
                                    }}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}
