use leptos::prelude::*;

use super::mission::stagger;
use crate::content::FOUNDERS;

#[component]
pub fn Founders() -> impl IntoView {
    view! {
        <div class="founders container">
            <div class="section-header">
                <h2>"Meet Our Founders"</h2>
                <p>"The visionaries behind Orin's revolutionary platform"</p>
            </div>

            <div class="founders-grid">
                {FOUNDERS
                    .iter()
                    .enumerate()
                    .map(|(index, founder)| {
                        view! {
                            <div class="founder-card fade-up" style=stagger(index)>
                                <div class="founder-avatar">{founder.initials}</div>
                                <h3 class="founder-name">{founder.name}</h3>
                                <p class="founder-role">{founder.role}</p>
                                <p class="founder-bio">{founder.bio}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
