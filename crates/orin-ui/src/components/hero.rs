use leptos::prelude::*;
use orin_core::SectionId;

use super::icons::{Icon, IconKind};
use crate::app::use_section_nav;

/// First panel. Rendered eagerly so it paints before anything else.
#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_section_nav();

    view! {
        <section class="panel hero" id=SectionId::Home.as_str()>
            <div class="hero-content">
                <div class="hero-text fade-up">
                    <h1>
                        "Where We " <span>"Harbour Local"</span> " And Support Communities"
                    </h1>
                    <p>
                        "Orin is revolutionizing the way teams collaborate, innovate, and bring \
                         groundbreaking ideas to life with AI-powered tools."
                    </p>
                    <div class="hero-buttons">
                        <button
                            class="btn-primary"
                            on:click=move |_| nav.activate_section(SectionId::Newsletter)
                        >
                            "Start Free Trial "
                            <Icon kind=IconKind::ArrowRight size=18 />
                        </button>
                        <button
                            class="btn-secondary"
                            on:click=move |_| nav.activate_section(SectionId::Pricing)
                        >
                            "View Pricing"
                        </button>
                    </div>
                </div>

                <div class="hero-visual fade-in">
                    <div class="hero-visual-box">
                        <div class="hero-visual-content">
                            <Icon kind=IconKind::Rocket size=48 />
                            <h2>"10x Faster"</h2>
                            <p>"Innovation at the speed of thought"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
