use dioxus::prelude::*;

use crate::i18n::tr;
use crate::t;

struct Badge {
    title_key: &'static str,
    note_key: &'static str,
}

const BADGES: &[Badge] = &[
    Badge {
        title_key: "trust-verified",
        note_key: "trust-verified-note",
    },
    Badge {
        title_key: "trust-insured",
        note_key: "trust-insured-note",
    },
    Badge {
        title_key: "trust-rated",
        note_key: "trust-rated-note",
    },
];

#[component]
pub fn TrustBadges() -> Element {
    rsx! {
        section { class: "trust",
            h2 { class: "trust__title", {t!("trust-title")} }
            ul { class: "trust__badges",
                { BADGES.iter().map(|badge| rsx! {
                    li { key: "{badge.title_key}", class: "trust__badge",
                        h3 { {tr(badge.title_key)} }
                        p { {tr(badge.note_key)} }
                    }
                })}
            }
        }
    }
}
