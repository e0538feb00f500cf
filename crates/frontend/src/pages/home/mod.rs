//! The single marketing page with the catalogue embedded

pub mod core_ranges;
pub mod sections;

use leptos::prelude::*;

use crate::domain::a003_product::ui::catalogue::ProductCatalogue;
use crate::domain::a005_specialist_service::ui::SpecialistServices;
use crate::domain::a006_contact::ui::ContactSection;
use core_ranges::CoreRanges;
use sections::{About, Hero, Mission, PaslodeHighlight, TradeCounter};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Mission />
        <CoreRanges />
        <section id="catalogue" class="cb-section">
            <ProductCatalogue />
        </section>
        <section id="specialist-services" class="cb-section">
            <SpecialistServices />
        </section>
        <PaslodeHighlight />
        <About />
        <TradeCounter />
        <ContactSection />
    }
}
