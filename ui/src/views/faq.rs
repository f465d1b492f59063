use dioxus::prelude::*;

use crate::i18n::tr;
use crate::t;

const FAQ_ENTRIES: usize = 4;

#[component]
pub fn Faq() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-faq",
            h1 { {t!("faq-title")} }
            p { {t!("faq-intro")} }

            dl { class: "faq__entries",
                { (1..=FAQ_ENTRIES).map(|index| {
                    let question = tr(&format!("faq-q{index}"));
                    let answer = tr(&format!("faq-a{index}"));
                    rsx! {
                        dt { key: "q{index}", class: "faq__question", "{question}" }
                        dd { key: "a{index}", class: "faq__answer", "{answer}" }
                    }
                })}
            }
        }
    }
}
