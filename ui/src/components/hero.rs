use dioxus::prelude::*;

use crate::t;

/// Landing hero: headline, lead and the two calls to action. The primary CTA
/// navigates to the job-posting funnel; the platform crate supplies the
/// handlers since `ui` does not know the route enum.
#[component]
pub fn Hero(on_post_job: EventHandler<()>, on_how_it_works: EventHandler<()>) -> Element {
    rsx! {
        header { class: "hero",
            div { class: "hero__content",
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__lead", {t!("hero-lead")} }
                div { class: "hero__cta-group",
                    button {
                        r#type: "button",
                        class: "button button--primary hero__cta",
                        onclick: move |_| on_post_job.call(()),
                        {t!("hero-cta-post")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost hero__cta",
                        onclick: move |_| on_how_it_works.call(()),
                        {t!("hero-cta-how")}
                    }
                }
            }
        }
    }
}
