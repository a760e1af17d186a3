//! Inline SVG icons (24x24 outline set, stroke follows `currentColor`).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Rocket,
    Target,
    Users,
    Zap,
    Check,
    CheckCircle,
    Mail,
    Sparkles,
    Menu,
    Close,
    Github,
    Twitter,
    Linkedin,
}

impl IconKind {
    /// Path data, drawn in order.
    #[must_use]
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            Self::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Self::Check => &["M20 6 9 17l-5-5"],
            Self::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Self::Mail => &[
                "M2 6a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_path_data() {
        let all = [
            IconKind::ArrowRight,
            IconKind::Rocket,
            IconKind::Target,
            IconKind::Users,
            IconKind::Zap,
            IconKind::Check,
            IconKind::CheckCircle,
            IconKind::Mail,
            IconKind::Sparkles,
            IconKind::Menu,
            IconKind::Close,
            IconKind::Github,
            IconKind::Twitter,
            IconKind::Linkedin,
        ];
        for kind in all {
            assert!(!kind.paths().is_empty(), "{kind:?}");
            assert!(kind.paths().iter().all(|d| !d.is_empty()));
        }
    }

    #[test]
    fn test_icon_component_exists() {
        let _component = Icon;
    }
}
