//! Product catalogue section: filters, facet panel, product grid and pages.
//!
//! All filtering state lives in one `CatalogueSession` signal. Loads are
//! started by the session and their results handed back to it, so a stale
//! response can never overwrite a newer selection.

pub mod facet_panel;
pub mod filters;
pub mod product_card;
pub mod state;

use contracts::shared::catalogue::{CatalogueStatus, PresetSignal};
use contracts::domain::a003_product::Product;
use leptos::prelude::*;

use crate::layout::global_context::use_site;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Button;
use crate::shared::storage;
use facet_panel::FacetPanel;
use filters::CatalogueFilters;
use product_card::ProductCard;
use state::{create_session, load_lookups, reload_products, retry, run_product_load};

#[derive(Clone, PartialEq)]
enum View {
    Loading,
    Unavailable(&'static str),
    Ready,
}

#[component]
pub fn ProductCatalogue() -> impl IntoView {
    let site = use_site();
    let session = create_session();
    // read once; cleared as soon as the resolver has seen it
    let persisted = StoredValue::new(storage::load_preset());

    let lookups_ready = Memo::new(move |_| session.with(|s| s.lookups().ready().is_some()));

    Effect::new(move |_| load_lookups(session));

    // Apply the incoming preset once per distinct signal, then make sure
    // some product list is loading.
    Effect::new(move |_| {
        let ready = lookups_ready.get();
        let preset = site.preset.get();
        let stored = persisted.get_value();

        let signal = PresetSignal {
            direct: preset.as_ref().map(|p| p.selector.as_str()),
            generation: preset.as_ref().map(|p| p.generation).unwrap_or(0),
            persisted: stored.as_deref(),
        };
        let mut consumed = None;
        let request = session
            .try_update(|s| s.apply_preset(signal, |r| consumed = Some(r.clone())))
            .flatten();

        if let Some(resolution) = consumed {
            log::debug!(
                "preset '{}' consumed, matched={}",
                resolution.key.selector,
                resolution.matched
            );
            if resolution.clear_persisted {
                storage::clear_preset();
                persisted.set_value(None);
            }
            site.clear_preset();
        }

        match request {
            Some(request) => run_product_load(session, request),
            None if ready && session.with_untracked(|s| s.needs_product_load()) => {
                reload_products(session)
            }
            None => {}
        }
    });

    let view_state = Memo::new(move |_| {
        session.with(|s| match s.status() {
            CatalogueStatus::Loading => View::Loading,
            CatalogueStatus::Unavailable(err) => View::Unavailable(err.user_message()),
            CatalogueStatus::Ready => View::Ready,
        })
    });

    let page_items = move || {
        session.with(|s| {
            s.page()
                .items
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>()
        })
    };
    let current_page = Signal::derive(move || session.with(|s| s.page().page));
    let total_pages = Signal::derive(move || session.with(|s| s.page().total_pages));
    let total_items = move || session.with(|s| s.page().total_items);
    let on_page_change = Callback::new(move |page: usize| session.update(|s| s.set_page(page)));

    view! {
        <div class="cb-section__inner">
            <h2 class="cb-section__title">"Product Catalogue"</h2>
            <CatalogueFilters session=session />
            <FacetPanel session=session />
            {move || match view_state.get() {
                View::Loading => view! { <p class="cb-muted">"Loading products…"</p> }.into_any(),
                View::Unavailable(message) => view! {
                    <div class="cb-error">
                        <p>{message}</p>
                        <Button variant="secondary" on_click=Callback::new(move |_| retry(session))>
                            "Try again"
                        </Button>
                    </div>
                }.into_any(),
                View::Ready => view! {
                    <div class="cb-filter-meta">
                        {move || match total_items() {
                            1 => "1 product".to_string(),
                            n => format!("{} products", n),
                        }}
                    </div>
                    <Show
                        when=move || { total_items() > 0 }
                        fallback=|| view! {
                            <div class="cb-empty">"No products match your filters."</div>
                        }
                    >
                        <div class="cb-catalogue-grid">
                            <For
                                each=page_items
                                key=|p| p.id
                                children=move |product: Product| {
                                    view! { <ProductCard product=product session=session /> }
                                }
                            />
                        </div>
                    </Show>
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        on_page_change=on_page_change
                    />
                }.into_any(),
            }}
        </div>
    }
}
