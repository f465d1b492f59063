use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::t;

/// Footer links are platform-built `Link`s, same contract as the navbar.
pub struct FooterBuilder {
    pub about: fn(label: &str) -> Element,
    pub terms: fn(label: &str) -> Element,
    pub privacy: fn(label: &str) -> Element,
    pub help: fn(label: &str) -> Element,
}

static FOOTER_BUILDER: OnceCell<FooterBuilder> = OnceCell::new();

pub fn register_footer(builder: FooterBuilder) {
    let _ = FOOTER_BUILDER.set(builder);
}

#[component]
pub fn AppFooter() -> Element {
    // Re-render on language toggle.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let links: Option<VNode> = FOOTER_BUILDER.get().map(|b| {
        let about = (b.about)(&t!("footer-about"));
        let terms = (b.terms)(&t!("footer-terms"));
        let privacy = (b.privacy)(&t!("footer-privacy"));
        let help = (b.help)(&t!("footer-help"));

        rsx! {
            nav { class: "footer__links",
                {about}
                {terms}
                {privacy}
                {help}
            }
        }
        .expect("AppFooter: rsx render failed")
    });

    rsx! {
        footer { class: "footer",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "footer__inner",
                if let Some(nav) = links {
                    {nav}
                }
                span { class: "footer__copyright", {t!("footer-copyright")} }
            }
        }
    }
}
