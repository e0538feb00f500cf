use crate::layout::global_context::SiteContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Cart and preset selector are shared by the whole page
    provide_context(SiteContext::new());

    view! {
        <AppRoutes />
    }
}
