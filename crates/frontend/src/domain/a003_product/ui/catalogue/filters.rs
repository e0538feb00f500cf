use contracts::shared::catalogue::{CatalogueSession, Selection, ALL};
use leptos::prelude::*;

use super::state::run_product_load;
use crate::shared::components::ui::{Input, Select};

/// Category, brand and free-text filters
#[component]
pub fn CatalogueFilters(session: RwSignal<CatalogueSession>) -> impl IntoView {
    let category_options = Signal::derive(move || {
        session.with(|s| {
            std::iter::once((ALL.to_string(), "All categories".to_string()))
                .chain(
                    s.categories()
                        .iter()
                        .map(|c| (c.id.to_string(), c.name.clone())),
                )
                .collect::<Vec<_>>()
        })
    });
    let brand_options = Signal::derive(move || {
        session.with(|s| {
            std::iter::once((ALL.to_string(), "All brands".to_string()))
                .chain(s.brands().iter().map(|b| (b.id.to_string(), b.name.clone())))
                .collect::<Vec<_>>()
        })
    });

    let category_value =
        Signal::derive(move || session.with(|s| s.filters().category().to_form_value()));
    let brand_value = Signal::derive(move || session.with(|s| s.filters().brand().to_form_value()));
    let query_value = Signal::derive(move || session.with(|s| s.filters().query().to_string()));

    let on_category = Callback::new(move |value: String| {
        let request = session
            .try_update(|s| s.select_category(Selection::from_form_value(&value)))
            .flatten();
        if let Some(request) = request {
            run_product_load(session, request);
        }
    });
    let on_brand = Callback::new(move |value: String| {
        session.update(|s| {
            s.select_brand(Selection::from_form_value(&value));
        });
    });
    let on_query = Callback::new(move |value: String| {
        session.update(|s| {
            s.set_query(&value);
        });
    });

    view! {
        <div class="cb-catalogue-filters">
            <Select
                id="cbCategory"
                label="Category"
                value=category_value
                options=category_options
                on_change=on_category
                class="cb-filter-group"
            />
            <Select
                id="cbBrand"
                label="Brand"
                value=brand_value
                options=brand_options
                on_change=on_brand
                class="cb-filter-group"
            />
            <Input
                id="cbSearch"
                label="Search"
                input_type="search"
                placeholder="Search by name, SKU or description…"
                value=query_value
                on_input=on_query
                class="cb-filter-group--search"
            />
        </div>
    }
}
