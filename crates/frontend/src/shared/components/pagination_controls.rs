use crate::shared::icons::icon;
use contracts::shared::catalogue::{page_window, PageLink};
use leptos::prelude::*;

/// Page strip for the catalogue. Pages are 1-based; hidden when there is
/// only one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages, at least 1
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let links = move || page_window(current_page.get(), total_pages.get());

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="cb-pagination" aria-label="Catalogue pages">
                <button
                    class="cb-pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    links()
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Gap => {
                                view! { <span class="cb-pagination-dots">"…"</span> }.into_any()
                            }
                            PageLink::Page(page) => {
                                view! {
                                    <button
                                        class=move || {
                                            if current_page.get() == page {
                                                "cb-pagination-btn active"
                                            } else {
                                                "cb-pagination-btn"
                                            }
                                        }
                                        on:click=move |_| on_page_change.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="cb-pagination-btn"
                    on:click=move |_| {
                        let next = (current_page.get() + 1).min(total_pages.get());
                        on_page_change.run(next);
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
