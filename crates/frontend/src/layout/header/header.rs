use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let count = move || site.cart.with(|c| c.total_quantity());

    view! {
        <header class="cb-header">
            <div class="cb-header__inner">
                <a class="cb-header__logo" href="#top">"CRAIGHEAD"</a>
                <nav class="cb-header__nav">
                    <a href="#catalogue">"PRODUCTS"</a>
                    <a href="#specialist-services">"SERVICES"</a>
                    <a href="#about">"ABOUT"</a>
                    <a href="#contact">"CONTACT"</a>
                </nav>
                <button
                    type="button"
                    class="cb-header__enquiry"
                    aria-label="Open trade enquiry"
                    on:click=move |_| site.toggle_cart()
                >
                    {icon("enquiry")}
                    <span>"ENQUIRY"</span>
                    <Show when=move || { count() > 0 }>
                        <span class="cb-header__count">{count}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}
