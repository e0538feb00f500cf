use contracts::domain::a004_enquiry::{CartError, CustomerDetails, SubmissionError, SubmissionPhase};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a004_enquiry::api::submit_enquiry;
use crate::layout::global_context::use_site;
use crate::shared::components::ui::{Button, Input, Textarea};

/// Message for `field`, whether it came from local validation ("email") or
/// from the server ("customer.email")
fn error_for(errors: &FieldErrors, field: &str) -> Option<String> {
    errors
        .get(field)
        .or_else(|| errors.get(&format!("customer.{}", field)))
        .map(str::to_string)
}

#[component]
pub fn CustomerForm() -> impl IntoView {
    let site = use_site();
    let customer = RwSignal::new(CustomerDetails::default());
    let note = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let submitting = Signal::derive(move || site.cart.with(|c| c.is_submitting()));
    let failure = move || {
        site.cart.with(|c| match c.phase() {
            SubmissionPhase::Failed(err) => Some(err.user_message()),
            _ => None,
        })
    };
    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| error_for(e, field)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let details = customer.get_untracked();
        let message = note.get_untracked();
        let started = site
            .cart
            .try_update(|c| c.begin_submission(&details, Some(&message)));

        match started {
            Some(Ok(payload)) => {
                errors.set(FieldErrors::new());
                leptos::task::spawn_local(async move {
                    let result = submit_enquiry(&payload).await;
                    match &result {
                        Ok(receipt) => {
                            log::info!("enquiry sent, reference {}", receipt.reference);
                            note.set(String::new());
                        }
                        Err(SubmissionError::Invalid(field_errors)) => {
                            errors.set(field_errors.clone());
                        }
                        Err(err) => log::error!("enquiry failed: {}", err),
                    }
                    site.cart.update(|c| c.complete_submission(result));
                });
            }
            Some(Err(CartError::Validation(field_errors))) => errors.set(field_errors),
            Some(Err(err)) => log::warn!("enquiry not started: {}", err),
            None => {}
        }
    };

    view! {
        <form class="cb-enquiry__form" on:submit=on_submit novalidate>
            <h3>"Your Details"</h3>
            <Input
                placeholder="Name *"
                value=Signal::derive(move || customer.with(|c| c.name.clone()))
                on_input=Callback::new(move |v| customer.update(|c| c.name = v))
                error=field_error("name")
                required=true
            />
            <Input
                placeholder="Company"
                value=Signal::derive(move || customer.with(|c| c.company.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| customer.update(|c| c.company = Some(v)))
            />
            <Input
                input_type="email"
                placeholder="Email *"
                value=Signal::derive(move || customer.with(|c| c.email.clone()))
                on_input=Callback::new(move |v| customer.update(|c| c.email = v))
                error=field_error("email")
                required=true
            />
            <Input
                input_type="tel"
                placeholder="Phone"
                value=Signal::derive(move || customer.with(|c| c.phone.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| customer.update(|c| c.phone = Some(v)))
            />
            <Textarea
                placeholder="Additional information"
                value=note
                on_input=Callback::new(move |v| note.set(v))
            />
            {move || failure().map(|m| view! { <p class="cb-error" role="alert">{m}</p> })}
            <Button
                button_type="submit"
                class="cb-enquiry__submit"
                disabled=submitting
            >
                {move || if submitting.get() { "Sending…" } else { "SEND ENQUIRY" }}
            </Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_reads_local_and_server_keys() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Please enter your name.");
        errors.insert("customer.email", "Please enter a valid email address.");
        assert_eq!(error_for(&errors, "name").as_deref(), Some("Please enter your name."));
        assert_eq!(
            error_for(&errors, "email").as_deref(),
            Some("Please enter a valid email address.")
        );
        assert_eq!(error_for(&errors, "phone"), None);
    }
}
