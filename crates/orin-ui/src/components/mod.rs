//! Page components
//!
//! - `Hero`, `Mission`, `Founders`, `Pricing`, `Newsletter`, `Footer`: the
//!   static panels
//! - `Navbar`, `SectionDots`: navigation, driven by `SectionNav`
//! - `Background`: animated canvas behind everything
//! - `LazyPanel`: defers a panel to the next frame
//! - `icons`: inline SVG icon set

pub mod background;
pub mod dots;
pub mod footer;
pub mod founders;
pub mod hero;
pub mod icons;
pub mod lazy_panel;
pub mod mission;
pub mod navbar;
pub mod newsletter;
pub mod pricing;

pub use background::Background;
pub use dots::SectionDots;
pub use footer::Footer;
pub use founders::Founders;
pub use hero::Hero;
pub use icons::{Icon, IconKind};
pub use lazy_panel::LazyPanel;
pub use mission::Mission;
pub use navbar::Navbar;
pub use newsletter::Newsletter;
pub use pricing::Pricing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_exist() {
        // Compile-time test - if this compiles, the components are valid
        let _ = (Hero, Mission, Founders, Pricing, Newsletter, Footer);
        let _ = (Navbar, SectionDots, Background, LazyPanel, Icon);
    }
}
