//! Trade enquiry side panel

pub mod customer_form;
pub mod line_items;

use contracts::domain::a004_enquiry::{CartState, SubmissionPhase};
use leptos::prelude::*;

use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use customer_form::CustomerForm;
use line_items::LineItems;

/// What the panel body shows; independent of visibility so the customer
/// form survives closing and reopening the panel
#[derive(Clone, Copy, PartialEq, Eq)]
enum Body {
    Empty,
    Sent,
    Items,
}

impl From<CartState> for Body {
    fn from(state: CartState) -> Self {
        match state {
            CartState::EmptyClosed | CartState::EmptyOpen => Body::Empty,
            CartState::EmptyOpenPostSubmit => Body::Sent,
            CartState::PopulatedClosed | CartState::PopulatedOpen => Body::Items,
        }
    }
}

#[component]
pub fn EnquiryPanel() -> impl IntoView {
    let site = use_site();
    let body = Memo::new(move |_| site.cart.with(|c| Body::from(c.state())));
    let reference = move || {
        site.cart.with(|c| match c.phase() {
            SubmissionPhase::Sent(receipt) => Some(receipt.reference.to_string()),
            _ => None,
        })
    };

    view! {
        <aside class=move || {
            if site.cart.with(|c| c.is_open()) { "cb-enquiry cb-enquiry--open" } else { "cb-enquiry" }
        }>
            <header class="cb-enquiry__header">
                <h2>"Trade Enquiry"</h2>
                <button
                    type="button"
                    class="cb-enquiry__close"
                    aria-label="Close"
                    on:click=move |_| site.cart.update(|c| c.set_open(false))
                >
                    {icon("close")}
                </button>
            </header>
            <div class="cb-enquiry__body">
                {move || match body.get() {
                    Body::Empty => view! {
                        <p class="cb-enquiry__empty">"Your enquiry list is empty."</p>
                    }.into_any(),
                    Body::Sent => view! {
                        <div class="cb-enquiry__success">
                            <p>"Thank you – your enquiry has been sent."</p>
                            {reference().map(|r| view! {
                                <p class="cb-muted">"Reference: " {r}</p>
                            })}
                        </div>
                    }.into_any(),
                    Body::Items => view! {
                        <LineItems />
                        <CustomerForm />
                    }.into_any(),
                }}
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_ignores_visibility() {
        assert!(Body::from(CartState::PopulatedOpen) == Body::from(CartState::PopulatedClosed));
        assert!(Body::from(CartState::EmptyOpen) == Body::Empty);
        assert!(Body::from(CartState::EmptyOpenPostSubmit) == Body::Sent);
    }
}
