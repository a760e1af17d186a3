use leptos::prelude::*;
use orin_core::SectionId;

use super::icons::{Icon, IconKind};
use super::mission::stagger;
use crate::app::use_section_nav;
use crate::content::PLANS;

#[component]
pub fn Pricing() -> impl IntoView {
    let nav = use_section_nav();

    view! {
        <div class="pricing container">
            <div class="section-header">
                <h2>"Simple, Transparent Pricing"</h2>
                <p>"Choose the plan that fits your needs"</p>
            </div>

            <div class="pricing-grid">
                {PLANS
                    .iter()
                    .enumerate()
                    .map(|(index, plan)| {
                        let featured = plan.featured;
                        view! {
                            <div
                                class="pricing-card fade-up"
                                class:featured=move || featured
                                style=stagger(index)
                            >
                                <div class="pricing-tier">{plan.name}</div>
                                <div class="pricing-price">
                                    {plan.price}
                                    <span>{plan.period}</span>
                                </div>
                                <ul class="pricing-features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <li>
                                                    <Icon kind=IconKind::Check size=18 />
                                                    " "
                                                    {*feature}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <button
                                    class={if featured { "btn-primary" } else { "btn-secondary" }}
                                    on:click=move |_| nav.activate_section(SectionId::Newsletter)
                                >
                                    {plan.call_to_action()}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
