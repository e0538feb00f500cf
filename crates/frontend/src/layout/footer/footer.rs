use leptos::prelude::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="cb-footer">
            <div class="cb-footer__inner">
                {format!(
                    "© {} Craighead Building Supplies Ltd. All rights reserved.",
                    current_year(),
                )}
            </div>
        </footer>
    }
}
