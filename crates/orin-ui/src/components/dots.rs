use leptos::prelude::*;
use orin_core::SectionSequence;

use crate::app::use_section_nav;

/// Vertical dot indicator, one dot per section.
#[component]
pub fn SectionDots() -> impl IntoView {
    let nav = use_section_nav();

    view! {
        <nav class="section-dots" aria-label="Sections">
            {SectionSequence::default()
                .iter()
                .enumerate()
                .map(|(index, section)| {
                    view! {
                        <button
                            class="dot"
                            class:active=move || nav.is_current(index)
                            aria-label=section.nav_label()
                            title=section.nav_label()
                            on:click=move |_| nav.activate(index)
                        />
                    }
                })
                .collect_view()}
        </nav>
    }
}
