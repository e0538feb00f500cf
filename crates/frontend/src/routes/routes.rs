use crate::domain::a004_enquiry::ui::panel::EnquiryPanel;
use crate::layout::Shell;
use crate::pages::home::HomePage;
use leptos::prelude::*;
// Single page site: sections are reached through anchors, no router needed

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell
            content=|| view! { <HomePage /> }.into_any()
            aside=|| view! { <EnquiryPanel /> }.into_any()
        />
    }
}
