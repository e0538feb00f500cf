pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page frame: header, scrolling content, footer and the enquiry side panel.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  content (sections)          |  aside    |
/// |                              | (overlay) |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C, A>(content: C, aside: A) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    A: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="cb-page cb-page--dark">
            <header::Header />
            <main>
                {content()}
            </main>
            <footer::Footer />
            {aside()}
        </div>
    }
}
