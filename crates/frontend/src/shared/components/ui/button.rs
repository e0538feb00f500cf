use leptos::prelude::*;

/// Button with variants ("primary", "secondary", "ghost") and sizes ("md", "sm")
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// "button" unless set; use "submit" inside forms
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "cb-btn--secondary",
        "ghost" => "cb-btn--ghost",
        _ => "cb-btn--primary",
    };
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "cb-btn--small"
        } else {
            ""
        }
    };
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("cb-btn {} {} {}", variant_class(), size_class(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
