use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="cb-hero">
            <div class="cb-hero__content">
                <h1>"BUILDING SUPPLIES"</h1>
                <p>"FIXINGS · SEALANTS · ADHESIVES · POWER TOOLS · FIRE RATED"</p>
                <div class="cb-hero__actions">
                    <a href="#catalogue" class="cb-btn cb-btn--primary">"BROWSE CATALOGUE"</a>
                    <a href="#specialist-services" class="cb-btn cb-btn--secondary">
                        "SPECIALIST SERVICES"
                    </a>
                </div>
            </div>
            <div class="cb-hero__image"></div>
        </section>
    }
}

#[component]
pub fn Mission() -> impl IntoView {
    view! {
        <section class="cb-section cb-section--mission">
            <div class="cb-section__inner cb-mission">
                <h2 class="cb-mission__title">"OUR MISSION"</h2>
                <p class="cb-mission__text">
                    "To support the trade with dependable building supplies, fire-rated solutions and straightforward, honest advice, delivered on time, every time."
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn PaslodeHighlight() -> impl IntoView {
    view! {
        <section id="services" class="cb-section cb-section--paslode">
            <div class="cb-section__inner">
                <div class="cb-paslode-main">
                    <div class="cb-paslode-main__image">
                        <img src="/images/paslode/paslode-nailer-studio.png" alt="Paslode nail gun" />
                    </div>
                    <div class="cb-paslode-main__content">
                        <span class="cb-pill cb-pill--paslode">"PASLODE SERVICE & TRAINING"</span>
                        <h2>"Official Paslode Repair & Training Centre"</h2>
                        <p>
                            "Craighead is an authorised Paslode service partner, offering certified repairs, servicing and training using genuine Paslode parts and procedures."
                        </p>
                        <a href="#contact" class="cb-btn cb-btn--paslode-primary">"BOOK A REPAIR"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="cb-section cb-section--mission">
            <div class="cb-section__inner cb-mission">
                <h2 class="cb-mission__title">"ABOUT CRAIGHEAD"</h2>
                <p class="cb-mission__text">
                    "Craighead Building Supplies specialise in fixings, sealants, adhesives and fire-rated products, backed by a fully categorised online catalogue and a dedicated Paslode repair & training centre."
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn TradeCounter() -> impl IntoView {
    view! {
        <section id="trade-counter" class="cb-section cb-section--trade">
            <div class="cb-section__inner">
                <h2 class="cb-mission__title">"TRADE COUNTER"</h2>
                <p class="cb-mission__text">
                    "Our trade counter stocks fixings, sealants, adhesives, power tools and fire-rated products. Build an enquiry list from the catalogue and we will come back with pricing and availability."
                </p>
            </div>
        </section>
    }
}
