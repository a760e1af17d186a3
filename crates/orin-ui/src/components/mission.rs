use leptos::prelude::*;

use super::icons::Icon;
use crate::content::MISSION;

#[component]
pub fn Mission() -> impl IntoView {
    view! {
        <div class="mission container">
            <div class="section-header">
                <h2>"Our Mission"</h2>
                <p>"Empowering creators and innovators to build the future, one idea at a time"</p>
            </div>

            <div class="mission-grid">
                {MISSION
                    .iter()
                    .enumerate()
                    .map(|(index, point)| {
                        view! {
                            <div class="mission-card fade-up" style=stagger(index)>
                                <div class="mission-icon">
                                    <Icon kind=point.icon size=32 />
                                </div>
                                <h3>{point.title}</h3>
                                <p>{point.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Inline style that delays a card's entrance by 100ms per position.
#[must_use]
pub fn stagger(index: usize) -> String {
    format!("animation-delay: {}ms", index.saturating_mul(100))
}
