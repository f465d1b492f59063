use dioxus::prelude::*;

use crate::components::hero::Hero;
use crate::components::reviews::Reviews;
use crate::components::trust_badges::TrustBadges;

#[component]
pub fn Home(on_post_job: EventHandler<()>, on_how_it_works: EventHandler<()>) -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            Hero { on_post_job, on_how_it_works }

            div { class: "page-home__pitch",
                h2 { {crate::t!("home-title")} }
                p { {crate::t!("home-intro-1")} }
                ul { class: "page-home__features",
                    li { {crate::t!("home-feature-quotes")} }
                    li { {crate::t!("home-feature-vetted")} }
                    li { {crate::t!("home-feature-free")} }
                }
                p { class: "page-home__cta", {crate::t!("home-cta")} }
            }

            Reviews {}
            TrustBadges {}
        }
    }
}
