use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n::{self, Language};
use crate::t;

// Navbar stylesheet shared by every platform shell.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the localized label and returns a link that already
/// contains that label as its child, preserving styling.
///
/// Wiring (in the platform crate, before rendering the root):
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" }),
///     // ...
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub post_job: fn(label: &str) -> Element,
    pub complaint: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
    pub faq: fn(label: &str) -> Element,
    pub login: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    // Global language code signal, provided by the platform crate.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_code = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| Language::default().code().to_string());

    let on_change = move |evt: dioxus::events::FormEvent| {
        let Some(lang) = Language::from_code(&evt.value()) else {
            return;
        };
        if i18n::set_site_language(lang).is_ok() {
            if let Some(mut code) = lang_code_ctx {
                code.set(lang.code().to_string());
            }
        }
    };

    let nav_links: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let post_job = (b.post_job)(&t!("nav-post-job"));
        let complaint = (b.complaint)(&t!("nav-complaint"));
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let faq = (b.faq)(&t!("nav-faq"));
        let login = (b.login)(&t!("nav-login"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {post_job}
                {complaint}
                {dashboard}
                {faq}
                {login}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "verki" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = nav_links {
                    {nav}
                }

                // Locale switcher
                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_code}",
                        oninput: on_change,
                        { Language::ALL.iter().map(|lang| {
                            let code = lang.code();
                            let label = lang.label();
                            rsx!{
                                option { key: "{code}", value: "{code}", "{label}" }
                            }
                        })}
                    }
                }
            }
        }
    }
}
