use contracts::domain::a005_specialist_service::SpecialistService;
use contracts::shared::catalogue::LoadState;
use leptos::prelude::*;

use crate::domain::a005_specialist_service::api::fetch_specialist_services;

#[component]
pub fn SpecialistServices() -> impl IntoView {
    let services = RwSignal::new(LoadState::<Vec<SpecialistService>>::Loading);

    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            match fetch_specialist_services().await {
                Ok(list) => services.set(LoadState::Ready(list)),
                Err(err) => {
                    log::error!("specialist services failed: {}", err);
                    services.set(LoadState::Failed(err));
                }
            }
        });
    });

    view! {
        <div class="cb-section__inner">
            <h2 class="cb-mission__title">"Specialist Services"</h2>
            {move || services.with(|state| match state {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="cb-muted">"Loading services…"</p> }.into_any()
                }
                LoadState::Failed(err) => {
                    view! { <p class="cb-error">{err.user_message()}</p> }.into_any()
                }
                LoadState::Ready(list) if list.is_empty() => {
                    view! { <p class="cb-muted">"No specialist services listed yet."</p> }.into_any()
                }
                LoadState::Ready(list) => view! {
                    <div class="cb-category-grid cb-services-grid">
                        {list.iter().map(service_card).collect_view()}
                    </div>
                }.into_any(),
            })}
        </div>
    }
}

fn service_card(service: &SpecialistService) -> impl IntoView {
    view! {
        <article class="cb-card cb-card--service">
            <div class="cb-card__image">
                <img src=service.image_or_placeholder().to_string() alt=service.name.clone() loading="lazy" />
            </div>
            <div class="cb-card__body">
                <h3 class="cb-card__title">{service.name.clone()}</h3>
                {service
                    .description
                    .clone()
                    .map(|d| view! { <p class="cb-card__description">{d}</p> })}
            </div>
        </article>
    }
}
