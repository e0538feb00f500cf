use contracts::domain::a003_product::Product;
use contracts::domain::a004_enquiry::AddOutcome;
use contracts::shared::catalogue::CatalogueSession;
use leptos::prelude::*;

use crate::layout::global_context::use_site;
use crate::shared::components::ui::{Button, Input, Select};

pub const PRODUCT_PLACEHOLDER_IMAGE: &str = "/images/product-placeholder-dark.jpg";

#[component]
pub fn ProductCard(product: Product, session: RwSignal<CatalogueSession>) -> impl IntoView {
    let site = use_site();
    let variants = product.variant_options();
    let variant_choices: Vec<(String, String)> = variants
        .iter()
        .map(|v| (v.id.to_string(), v.label.clone()))
        .collect();
    let has_choice = variants.len() > 1;

    let first = variants
        .first()
        .map(|v| v.id.to_string())
        .unwrap_or_default();
    let selected_variant = RwSignal::new(first);
    let quantity = RwSignal::new("1".to_string());
    let quantity_error = RwSignal::new(None::<String>);

    let brand = session.with_untracked(|s| s.brand_name(product.brand_id).map(str::to_string));
    let image = product
        .image_ref
        .clone()
        .unwrap_or_else(|| PRODUCT_PLACEHOLDER_IMAGE.to_string());
    let product_ref = product.to_ref();

    let add = Callback::new(move |_| {
        let wanted = selected_variant.get_untracked();
        let Some(variant) = variants.iter().find(|v| v.id.to_string() == wanted).cloned() else {
            return;
        };
        let raw = quantity.get_untracked();
        let outcome = site
            .cart
            .try_update(|c| c.add_input_and_open(product_ref.clone(), variant, &raw));
        match outcome {
            Some(Ok(added)) => {
                if let AddOutcome::Merged(index) = added {
                    log::debug!("merged into enquiry line {}", index);
                }
                quantity_error.set(None);
                quantity.set("1".to_string());
            }
            Some(Err(err)) => quantity_error.set(Some(err.to_string())),
            None => {}
        }
    });

    view! {
        <article class="cb-card">
            <div class="cb-card__image">
                <img src=image alt=product.name.clone() loading="lazy" />
            </div>
            <div class="cb-card__body">
                <h3 class="cb-card-title">{product.name.clone()}</h3>
                {product.sku.clone().map(|sku| view! { <div class="cb-card-sku">"SKU: " {sku}</div> })}
                {brand.map(|b| view! { <div class="cb-card-brand">{b}</div> })}
                {product
                    .description
                    .clone()
                    .map(|d| view! { <p class="cb-card-description">{d}</p> })}
                <div class="cb-card-meta">
                    <Show when=move || has_choice>
                        <Select
                            label="Option"
                            value=selected_variant
                            options=variant_choices.clone()
                            on_change=Callback::new(move |v| selected_variant.set(v))
                        />
                    </Show>
                    <Input
                        label="Qty"
                        input_type="number"
                        value=quantity
                        on_input=Callback::new(move |v| quantity.set(v))
                        error=quantity_error
                        class="cb-card-qty"
                    />
                    <Button on_click=add>"ADD TO ENQUIRY"</Button>
                </div>
            </div>
        </article>
    }
}
