use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::api::ApiClient;
use crate::t;

/// The shell renders static placeholder numbers; only the detail panel talks
/// to the backend.
const MOCK_JOBS: &[(&str, &str)] = &[
    ("1", "Skipta um blöndunartæki"),
    ("2", "Mála stofu og gang"),
    ("3", "Leggja parket í svefnherbergi"),
];

#[component]
pub fn Dashboard() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let selected: Signal<Option<String>> = use_signal(|| None);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { {t!("dashboard-intro")} }

            div { class: "dashboard__cards",
                div { class: "dashboard__card",
                    span { class: "dashboard__card-value", "3" }
                    span { class: "dashboard__card-label", {t!("dashboard-card-active")} }
                }
                div { class: "dashboard__card",
                    span { class: "dashboard__card-value", "7" }
                    span { class: "dashboard__card-label", {t!("dashboard-card-quotes")} }
                }
                div { class: "dashboard__card",
                    span { class: "dashboard__card-value", "2" }
                    span { class: "dashboard__card-label", {t!("dashboard-card-messages")} }
                }
            }

            div { class: "dashboard__panels",
                ul { class: "dashboard__jobs",
                    { MOCK_JOBS.iter().map(|(id, title)| {
                        let is_active = selected().as_deref() == Some(*id);
                        let mut selected = selected;
                        let click_id = id.to_string();
                        rsx! {
                            li { key: "{id}",
                                class: format!(
                                    "dashboard__job {}",
                                    if is_active { "dashboard__job--active" } else { "" }
                                ),
                                button {
                                    r#type: "button",
                                    class: "dashboard__job-button",
                                    onclick: move |_| selected.set(Some(click_id.clone())),
                                    "{title}"
                                }
                            }
                        }
                    })}
                }

                JobDetailPanel { selected }
            }
        }
    }
}

/// Detail view for one posting: `GET {backend}/api/job-requests/{id}` with
/// credentials included.
#[component]
pub fn JobDetailPanel(selected: Signal<Option<String>>) -> Element {
    let api = use_context::<Rc<ApiClient>>();

    let detail = use_resource(move || {
        let api = api.clone();
        async move {
            match selected() {
                Some(id) => Some(api.job_request(&id).await),
                None => None,
            }
        }
    });

    let body = match &*detail.read() {
        Some(Some(Ok(job))) => {
            let address = job.address.clone().unwrap_or_else(|| "—".to_string());
            rsx! {
                h3 { class: "job-detail__title", "{job.title}" }
                p { class: "job-detail__description", "{job.description}" }
                ul { class: "job-detail__facts",
                    li {
                        span { class: "job-detail__label", {t!("dashboard-detail-status")} }
                        span { class: "job-detail__value", "{job.status}" }
                    }
                    li {
                        span { class: "job-detail__label", {t!("dashboard-detail-category")} }
                        span { class: "job-detail__value", "{job.category}" }
                    }
                    li {
                        span { class: "job-detail__label", {t!("dashboard-detail-postcode")} }
                        span { class: "job-detail__value", "{job.postcode}" }
                    }
                    li {
                        span { class: "job-detail__label", {t!("dashboard-detail-address")} }
                        span { class: "job-detail__value", "{address}" }
                    }
                    li {
                        span { class: "job-detail__label", {t!("dashboard-detail-quotes")} }
                        span { class: "job-detail__value", "{job.quotes_count}" }
                    }
                }
            }
        }
        Some(Some(Err(err))) => rsx! {
            p { class: "job-detail__error", {t!("dashboard-detail-error")} }
            p { class: "job-detail__error-detail", "{err}" }
        },
        _ => rsx! {
            p { class: "job-detail__placeholder", {t!("dashboard-detail-empty")} }
        },
    };

    rsx! {
        section { class: "job-detail",
            h2 { {t!("dashboard-detail-title")} }
            {body}
        }
    }
}
