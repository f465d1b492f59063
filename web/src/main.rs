use std::rc::Rc;

use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::footer::{register_footer, FooterBuilder};
use ui::components::{AppFooter, AppNavbar};
use ui::core::api::ApiClient;
use ui::core::auth::{self, AuthSession};
use ui::core::config;
use ui::i18n;
use ui::views::{Complaint, Dashboard, Done, Faq, Home, Login, PostJob, Privacy, Terms};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    HomeScreen {},
    #[route("/verk/nytt")]
    PostJobScreen {},
    #[route("/kvortun")]
    ComplaintScreen {},
    #[route("/sent/:flow")]
    DoneScreen { flow: String },
    #[route("/minar-sidur")]
    DashboardScreen {},
    #[route("/innskraning")]
    LoginScreen {},
    #[route("/spurt-og-svarad")]
    FaqScreen {},
    #[route("/skilmalar")]
    TermsScreen {},
    #[route("/personuvernd")]
    PrivacyScreen {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::HomeScreen {},
        "{label}"
    })
}
fn nav_post_job(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::PostJobScreen {},
        "{label}"
    })
}
fn nav_complaint(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::ComplaintScreen {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::DashboardScreen {},
        "{label}"
    })
}
fn nav_faq(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::FaqScreen {},
        "{label}"
    })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::LoginScreen {},
        "{label}"
    })
}

fn footer_about(label: &str) -> Element {
    rsx!(Link {
        class: "footer__link",
        to: Route::HomeScreen {},
        "{label}"
    })
}
fn footer_terms(label: &str) -> Element {
    rsx!(Link {
        class: "footer__link",
        to: Route::TermsScreen {},
        "{label}"
    })
}
fn footer_privacy(label: &str) -> Element {
    rsx!(Link {
        class: "footer__link",
        to: Route::PrivacyScreen {},
        "{label}"
    })
}
fn footer_help(label: &str) -> Element {
    rsx!(Link {
        class: "footer__link",
        to: Route::FaqScreen {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized navigation builders so the shared chrome can
        // render links without knowing this crate's Route enum.
        register_nav(NavBuilder {
            home: nav_home,
            post_job: nav_post_job,
            complaint: nav_complaint,
            dashboard: nav_dashboard,
            faq: nav_faq,
            login: nav_login,
        });
        register_footer(FooterBuilder {
            about: footer_about,
            terms: footer_terms,
            privacy: footer_privacy,
            help: footer_help,
        });
    }

    // Global language code signal; every localized view subscribes to it.
    use_context_provider(|| Signal::new(i18n::Language::default().code().to_string()));

    // API client + auth session shared by every descendant view.
    let api = use_context_provider(|| Rc::new(ApiClient::new(config::backend_base_url())));
    let session = use_context_provider(|| Signal::new(AuthSession::boot()));

    // Reconcile the cached profile against the server once on load.
    {
        let api = api.clone();
        use_future(move || {
            let api = api.clone();
            async move {
                let mut current = session();
                auth::run_check_auth(api.as_ref(), &mut current).await;
                let mut session = session;
                session.set(current);
            }
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router layout around the shared navbar/footer which allows
/// us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
        AppFooter {}
    }
}

#[component]
fn HomeScreen() -> Element {
    let nav = navigator();
    rsx! {
        Home {
            on_post_job: move |_| {
                nav.push(Route::PostJobScreen {});
            },
            on_how_it_works: move |_| {
                nav.push(Route::FaqScreen {});
            },
        }
    }
}

#[component]
fn PostJobScreen() -> Element {
    let nav = navigator();
    rsx! {
        PostJob {
            on_complete: move |_| {
                nav.push(Route::DoneScreen { flow: "post-job".to_string() });
            },
        }
    }
}

#[component]
fn ComplaintScreen() -> Element {
    let nav = navigator();
    rsx! {
        Complaint {
            on_complete: move |_| {
                nav.push(Route::DoneScreen { flow: "complaint".to_string() });
            },
        }
    }
}

#[component]
fn DoneScreen(flow: String) -> Element {
    let nav = navigator();
    rsx! {
        div { class: "page-done-shell page-done-shell--{flow}",
            Done {
                on_home: move |_| {
                    nav.push(Route::HomeScreen {});
                },
            }
        }
    }
}

#[component]
fn DashboardScreen() -> Element {
    rsx! {
        Dashboard {}
    }
}

#[component]
fn LoginScreen() -> Element {
    rsx! {
        Login {}
    }
}

#[component]
fn FaqScreen() -> Element {
    rsx! {
        Faq {}
    }
}

#[component]
fn TermsScreen() -> Element {
    rsx! {
        Terms {}
    }
}

#[component]
fn PrivacyScreen() -> Element {
    rsx! {
        Privacy {}
    }
}
