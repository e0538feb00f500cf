use leptos::prelude::*;

use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use crate::shared::location::scroll_to;

/// (category selector, icon)
const CORE_RANGES: [(&str, &str); 4] = [
    ("Fixings", "fixings"),
    ("Sealants & Adhesives", "sealants"),
    ("Power Tools", "power-tools"),
    ("Fire Rated Products", "fire"),
];

/// Buttons that jump to the catalogue with a range preselected
#[component]
pub fn CoreRanges() -> impl IntoView {
    let site = use_site();

    view! {
        <section id="products" class="cb-section">
            <div class="cb-section__inner">
                <h2 class="cb-mission__title">"CORE PRODUCT RANGES"</h2>
                <p class="cb-mission__text">
                    "Fully structured catalogue including fixings, sealants, power tools, Paslode, drill bits, abrasives, PPE, ironmongery and fire rated products."
                </p>
                <div class="cb-category-grid">
                    {CORE_RANGES
                        .iter()
                        .map(|&(name, icon_name)| {
                            view! {
                                <button
                                    type="button"
                                    class="cb-category-card"
                                    on:click=move |_| {
                                        site.request_category(name);
                                        scroll_to("catalogue");
                                    }
                                >
                                    <div class="cb-category-card__icon">{icon(icon_name)}</div>
                                    <div class="cb-category-card__label">{name}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
