use contracts::shared::catalogue::{CatalogueSession, FacetOptions, ANY};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Select};

/// Attribute filters of the loaded category. Renders nothing for categories
/// without facets.
#[component]
pub fn FacetPanel(session: RwSignal<CatalogueSession>) -> impl IntoView {
    let has_facets = move || session.with(|s| !s.facet_fields().is_empty());
    let options = move || session.with(|s| s.facet_options().to_vec());
    let any_set = move || session.with(|s| s.filters().facets().is_any_set());

    let clear = Callback::new(move |_| {
        session.update(|s| {
            s.clear_facets();
        });
    });

    view! {
        <Show when=has_facets>
            <div class="cb-facets">
                <For
                    each=options
                    key=|o: &FacetOptions| (o.field.key, o.values.clone())
                    children=move |facet: FacetOptions| {
                        view! { <FacetSelect session=session facet=facet /> }
                    }
                />
                <Button
                    variant="ghost"
                    size="sm"
                    disabled=Signal::derive(move || !any_set())
                    on_click=clear
                >
                    "Clear filters"
                </Button>
            </div>
        </Show>
    }
}

#[component]
fn FacetSelect(session: RwSignal<CatalogueSession>, facet: FacetOptions) -> impl IntoView {
    let key = facet.field.key;
    let options: Vec<(String, String)> = std::iter::once((ANY.to_string(), "Any".to_string()))
        .chain(facet.values.iter().map(|v| (v.clone(), v.clone())))
        .collect();
    let value = Signal::derive(move || {
        session.with(|s| s.filters().facets().value_or_any(key).to_string())
    });
    let on_change = Callback::new(move |selected: String| {
        session.update(|s| {
            s.set_facet(key, &selected);
        });
    });

    view! {
        <Select
            id=format!("cbFacet-{}", key)
            label=facet.field.label.to_string()
            value=value
            options=options
            on_change=on_change
            class="cb-filter-group"
        />
    }
}
