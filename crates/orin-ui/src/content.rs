//! Static page copy.
//!
//! Kept apart from the components so the markup stays readable and the copy
//! can be checked without a browser.

use orin_core::SectionId;

use crate::components::icons::IconKind;

pub const BRAND: &str = "Orin";

pub struct MissionPoint {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub static MISSION: [MissionPoint; 3] = [
    MissionPoint {
        icon: IconKind::Target,
        title: "Innovation First",
        description: "We believe in pushing boundaries and challenging the status quo to create breakthrough solutions that matter.",
    },
    MissionPoint {
        icon: IconKind::Users,
        title: "Collaboration",
        description: "Building bridges between ideas and execution through seamless teamwork and AI-enhanced workflows.",
    },
    MissionPoint {
        icon: IconKind::Zap,
        title: "Speed & Efficiency",
        description: "Accelerating the journey from concept to creation with cutting-edge technology and intelligent automation.",
    },
];

pub struct Founder {
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub static FOUNDERS: [Founder; 3] = [
    Founder {
        initials: "MK.",
        name: "Md Saqlain Khan",
        role: "CEO, CTO & Co-Founder",
        bio: "Visionary leader with 10+ years in tech innovation. Passionate about democratizing AI for creators worldwide.",
    },
    Founder {
        initials: "SH.",
        name: "Saffeerul Haque Syed",
        role: "CEO, CFO & Co-Founder",
        bio: "Technical architect behind our AI platform. Expert in machine learning and distributed systems.",
    },
    Founder {
        initials: "AK",
        name: "Afreen Anjum Khan",
        role: "CEO, CPO, CDO & Co-Founder",
        bio: "Product strategist focused on user experience. Champions human-centered design in AI applications.",
    },
];

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

impl Plan {
    /// Plans without a list price go through sales.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.period.is_empty()
    }

    #[must_use]
    pub const fn call_to_action(&self) -> &'static str {
        if self.is_custom() {
            "Contact Sales"
        } else {
            "Get Started"
        }
    }
}

pub static PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$29",
        period: "/month",
        features: &[
            "Up to 5 team members",
            "100 AI generations/month",
            "Basic analytics",
            "Email support",
            "1GB storage",
        ],
        featured: false,
    },
    Plan {
        name: "Professional",
        price: "$99",
        period: "/month",
        features: &[
            "Up to 20 team members",
            "Unlimited AI generations",
            "Advanced analytics",
            "Priority support",
            "50GB storage",
            "Custom integrations",
        ],
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "",
        features: &[
            "Unlimited team members",
            "Unlimited everything",
            "Custom AI models",
            "Dedicated support",
            "Unlimited storage",
            "SLA guarantee",
        ],
        featured: false,
    },
];

/// Newsletter perks: (emoji, label)
pub static NEWSLETTER_PERKS: [(&str, &str); 3] = [
    ("🚀", "Weekly insights"),
    ("💡", "Pro tips"),
    ("🎁", "Exclusive offers"),
];

/// Footer link target: a page section, or a placeholder URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Section(SectionId),
    External,
}

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [(&'static str, LinkTarget)],
}

pub static FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Product",
        links: &[
            ("Features", LinkTarget::Section(SectionId::Home)),
            ("Pricing", LinkTarget::Section(SectionId::Pricing)),
            ("API", LinkTarget::External),
            ("Documentation", LinkTarget::External),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            ("Mission", LinkTarget::Section(SectionId::Mission)),
            ("Team", LinkTarget::Section(SectionId::Founders)),
            ("Careers", LinkTarget::External),
            ("Blog", LinkTarget::External),
        ],
    },
    FooterColumn {
        heading: "Support",
        links: &[
            ("Contact", LinkTarget::Section(SectionId::Newsletter)),
            ("Help Center", LinkTarget::External),
            ("Status", LinkTarget::External),
            ("Terms of Service", LinkTarget::External),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_custom_plan_contacts_sales() {
        let enterprise = PLANS.iter().find(|p| p.name == "Enterprise");
        assert_eq!(
            enterprise.map(Plan::call_to_action),
            Some("Contact Sales")
        );
        assert_eq!(PLANS[0].call_to_action(), "Get Started");
    }

    #[test]
    fn test_founder_initials_are_short() {
        assert!(FOUNDERS.iter().all(|f| f.initials.chars().count() <= 3));
    }

    #[test]
    fn test_every_section_link_resolves_in_the_sequence() {
        let sections = orin_core::SectionSequence::default();
        for column in &FOOTER_COLUMNS {
            for (_, target) in column.links {
                if let LinkTarget::Section(id) = target {
                    assert!(sections.index_of(*id).is_some(), "{id} not in sequence");
                }
            }
        }
    }
}
