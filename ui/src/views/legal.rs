use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Terms() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-legal",
            h1 { {t!("terms-title")} }
            p { {t!("terms-body-1")} }
            p { {t!("terms-body-2")} }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-legal",
            h1 { {t!("privacy-title")} }
            p { {t!("privacy-body-1")} }
            p { {t!("privacy-body-2")} }
        }
    }
}
