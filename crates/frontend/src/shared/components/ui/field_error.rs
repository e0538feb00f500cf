use leptos::prelude::*;

/// Inline message under a form control; renders nothing without a message
#[component]
pub fn FieldError(#[prop(into)] message: MaybeProp<String>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! { <p class="form__error" role="alert">{m}</p> }
        })
    }
}
