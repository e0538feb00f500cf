use contracts::domain::a004_enquiry::SubmissionError;
use contracts::domain::a006_contact::{ContactForm, ContactReason};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a006_contact::api::send_contact;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};

const SEND_FAILED: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Contact details and the "get in touch" form
#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(Status::Idle);

    let sending = Signal::derive(move || status.get() == Status::Sending);
    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };
    let text_field = move |get: fn(&ContactForm) -> &String| {
        Signal::derive(move || form.with(|f| get(f).clone()))
    };
    let reasons: Vec<(String, String)> = ContactReason::OPTIONS
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(field_errors) = current.check() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        status.set(Status::Sending);
        let request = current.to_request();
        leptos::task::spawn_local(async move {
            match send_contact(&request).await {
                Ok(()) => {
                    form.set(ContactForm::default());
                    status.set(Status::Sent);
                }
                Err(err) => {
                    log::error!("contact form failed: {}", err);
                    let message = match err {
                        SubmissionError::Rejected {
                            message: Some(message),
                            ..
                        } => message,
                        _ => SEND_FAILED.to_string(),
                    };
                    status.set(Status::Failed(message));
                }
            }
        });
    };

    view! {
        <section id="contact" class="cb-section cb-section--contact">
            <div class="cb-section__inner cb-contact">
                <h2 class="cb-contact__title">"Get In Touch"</h2>
                <div class="cb-contact__details">
                    <h3 class="cb-contact__subtitle">"Craighead Building Supplies Ltd"</h3>
                    <p class="cb-contact__text">
                        "Trade counter enquiries, pricing and account questions: send us a message and the team will get back to you."
                    </p>
                </div>
                <form class="cb-contact__form" on:submit=on_submit novalidate>
                    <Input
                        id="contactName"
                        label="Name"
                        placeholder="Your name"
                        value=text_field(|f| &f.name)
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        error=field_error("name")
                        required=true
                    />
                    <Input
                        id="contactEmail"
                        label="Email"
                        input_type="email"
                        placeholder="Your email"
                        value=text_field(|f| &f.email)
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=field_error("email")
                        required=true
                    />
                    <Input
                        id="contactPhone"
                        label="Phone"
                        input_type="tel"
                        value=text_field(|f| &f.phone)
                        on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                    />
                    <Select
                        id="contactReason"
                        label="Reason"
                        value=Signal::derive(move || form.with(|f| f.reason.as_str().to_string()))
                        options=reasons
                        on_change=Callback::new(move |v: String| form.update(|f| f.reason = ContactReason::from(v)))
                    />
                    <Input
                        id="contactSubject"
                        label="Subject"
                        value=text_field(|f| &f.subject)
                        on_input=Callback::new(move |v| form.update(|f| f.subject = v))
                    />
                    <Textarea
                        id="contactMessage"
                        label="Message"
                        placeholder="Your message..."
                        rows=5
                        value=text_field(|f| &f.message)
                        on_input=Callback::new(move |v| form.update(|f| f.message = v))
                        error=field_error("message")
                        required=true
                    />
                    <Checkbox
                        id="contactAgree"
                        label="I agree to Craighead storing my details to answer this enquiry.".to_string()
                        checked=Signal::derive(move || form.with(|f| f.agree))
                        on_change=Callback::new(move |v| form.update(|f| f.agree = v))
                        error=field_error("agree")
                    />
                    {move || match status.get() {
                        Status::Sent => Some(view! {
                            <p class="cb-success" role="status">"Thanks, your message has been sent."</p>
                        }.into_any()),
                        Status::Failed(message) => Some(view! {
                            <p class="cb-error" role="alert">{message}</p>
                        }.into_any()),
                        Status::Idle | Status::Sending => None,
                    }}
                    <Button button_type="submit" disabled=sending>
                        {move || if sending.get() { "Sending…" } else { "SEND MESSAGE" }}
                    </Button>
                </form>
            </div>
        </section>
    }
}
