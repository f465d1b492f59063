use dioxus::prelude::*;

use crate::i18n::tr;
use crate::t;

/// A testimonial shown on the landing page. Author names stay as-is across
/// languages; the quote body goes through the catalog.
struct Review {
    author: &'static str,
    area: &'static str,
    body_key: &'static str,
    stars: u8,
}

const REVIEWS: &[Review] = &[
    Review {
        author: "Guðrún S.",
        area: "Reykjavík",
        body_key: "review-1-body",
        stars: 5,
    },
    Review {
        author: "Páll H.",
        area: "Kópavogur",
        body_key: "review-2-body",
        stars: 5,
    },
    Review {
        author: "María K.",
        area: "Akureyri",
        body_key: "review-3-body",
        stars: 4,
    },
];

#[component]
pub fn Reviews() -> Element {
    rsx! {
        section { class: "reviews",
            div { class: "reviews__header",
                h2 { {t!("reviews-title")} }
                p { {t!("reviews-lead")} }
            }
            ul { class: "reviews__items",
                { REVIEWS.iter().map(|review| {
                    let stars = "★".repeat(review.stars as usize);
                    rsx! {
                        li { key: "{review.author}", class: "reviews__item",
                            span { class: "reviews__stars", aria_label: "{review.stars} / 5", "{stars}" }
                            blockquote { class: "reviews__body", {tr(review.body_key)} }
                            span { class: "reviews__author", "{review.author} · {review.area}" }
                        }
                    }
                })}
            }
        }
    }
}
