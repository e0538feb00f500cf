use contracts::domain::a004_enquiry::EnquiryLineItem;
use leptos::prelude::*;

use crate::layout::global_context::use_site;
use crate::shared::components::ui::Button;

/// Quantity typed into a line; anything unreadable counts as 1 and the cart
/// clamps the rest
fn quantity_from_input(raw: &str) -> i64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(1)
}

#[component]
pub fn LineItems() -> impl IntoView {
    let site = use_site();
    let items = move || site.cart.with(|c| c.items().to_vec());
    let submitting = Signal::derive(move || site.cart.with(|c| c.is_submitting()));

    view! {
        <ul class="cb-enquiry__items">
            {move || {
                items()
                    .into_iter()
                    .enumerate()
                    .map(|(index, line)| view! { <LineItem index=index line=line /> })
                    .collect_view()
            }}
        </ul>
        <Button
            variant="ghost"
            size="sm"
            disabled=submitting
            on_click=Callback::new(move |_| site.cart.update(|c| c.clear()))
        >
            "Clear list"
        </Button>
    }
}

#[component]
fn LineItem(index: usize, line: EnquiryLineItem) -> impl IntoView {
    let site = use_site();
    let disabled = Signal::derive(move || site.cart.with(|c| c.is_submitting()));

    view! {
        <li>
            <div class="cb-enquiry__item-title">{line.product.name.clone()}</div>
            <div class="cb-enquiry__item-meta">
                {line.variant.label.clone()}
                {line.product.sku.clone().map(|sku| format!(" · {}", sku))}
            </div>
            <div class="cb-enquiry__item-controls">
                <input
                    type="number"
                    min="1"
                    aria-label="Quantity"
                    prop:value=line.quantity.to_string()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        let quantity = quantity_from_input(&event_target_value(&ev));
                        site.cart.update(|c| {
                            c.update_quantity(index, quantity);
                        });
                    }
                />
                <Button
                    variant="ghost"
                    size="sm"
                    disabled=disabled
                    on_click=Callback::new(move |_| {
                        site.cart.update(|c| {
                            c.remove_item(index);
                        });
                    })
                >
                    "Remove"
                </Button>
            </div>
        </li>
    }
}
