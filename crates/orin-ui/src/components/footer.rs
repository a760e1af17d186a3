use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::app::use_section_nav;
use crate::content::{BRAND, FOOTER_COLUMNS, LinkTarget};
use crate::dom;

const SOCIAL: [(IconKind, &str); 4] = [
    (IconKind::Github, "GitHub"),
    (IconKind::Twitter, "Twitter"),
    (IconKind::Linkedin, "LinkedIn"),
    (IconKind::Mail, "Email"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_section_nav();
    let year = dom::current_year();

    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-main">
                    <div class="footer-brand">
                        <h3 class="footer-logo">{BRAND}</h3>
                        <p>"Transforming ideas into reality with AI-powered innovation."</p>
                        <div class="social-links">
                            {SOCIAL
                                .into_iter()
                                .map(|(kind, label)| {
                                    view! {
                                        <a href="#" aria-label=label>
                                            <Icon kind=kind size=20 />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="footer-links">
                        {FOOTER_COLUMNS
                            .iter()
                            .map(|column| {
                                view! {
                                    <div class="footer-column">
                                        <h4>{column.heading}</h4>
                                        <ul>
                                            {column
                                                .links
                                                .iter()
                                                .map(|&(label, target)| {
                                                    view! { <li>{footer_link(label, target, nav)}</li> }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {year} {BRAND}. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}

fn footer_link(label: &'static str, target: LinkTarget, nav: crate::app::SectionNav) -> AnyView {
    match target {
        LinkTarget::Section(section) => view! {
            <a
                href=format!("#{}", section.as_str())
                on:click=move |ev| {
                    ev.prevent_default();
                    nav.activate_section(section);
                }
            >
                {label}
            </a>
        }
        .into_any(),
        LinkTarget::External => view! { <a href="#">{label}</a> }.into_any(),
    }
}
