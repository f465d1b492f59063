//! Shared UI crate for verki. Most cross-platform logic and views live here.

pub mod core;
pub mod i18n;
pub mod views;
pub mod wizard;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Localized footer navigation (components/footer.rs)
    pub mod footer;
    pub use footer::register_footer;
    pub use footer::AppFooter;
    pub use footer::FooterBuilder;

    pub mod hero;
    pub use hero::Hero;

    pub mod reviews;
    pub use reviews::Reviews;

    pub mod trust_badges;
    pub use trust_badges::TrustBadges;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
