use leptos::prelude::*;
use orin_core::{SectionId, SectionSequence};

use super::icons::{Icon, IconKind};
use crate::app::use_section_nav;
use crate::content::BRAND;

/// Fixed top bar: logo, one link per section, mobile menu toggle.
///
/// Gains the `scrolled` class once the page has left the first section.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_section_nav();
    let menu_open = RwSignal::new(false);

    let go = move |index: usize| {
        nav.activate(index);
        menu_open.set(false);
    };

    view! {
        <nav class="navbar" class:scrolled={move || nav.current() > 0}>
            <div class="nav-container">
                <div class="logo" on:click=move |_| go(0)>
                    {BRAND}
                </div>

                <div class="nav-links" class=("mobile-open", move || menu_open.get())>
                    {SectionSequence::default()
                        .iter()
                        .enumerate()
                        .map(|(index, section)| {
                            view! {
                                <a
                                    href=format!("#{}", section.as_str())
                                    class:active=move || nav.is_current(index)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go(index);
                                    }
                                >
                                    {section.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            nav.activate_section(SectionId::Pricing);
                            menu_open.set(false);
                        }
                    >
                        "Get Started"
                    </button>
                </div>

                <button
                    class="mobile-menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon kind=IconKind::Close /> }.into_any()
                        } else {
                            view! { <Icon kind=IconKind::Menu /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </nav>
    }
}
