use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::api::ApiClient;
use crate::core::auth::{self, AuthSession};
use crate::t;

#[component]
pub fn Login() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let api = use_context::<Rc<ApiClient>>();
    let session = use_context::<Signal<AuthSession>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let snapshot = session();
    let busy = snapshot.busy;

    let on_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            spawn(async move {
                let mut session = session;
                let mut current = session();
                let _ = auth::run_login(api.as_ref(), &mut current, &email(), &password()).await;
                session.set(current);
            });
        }
    };

    let on_logout = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                let mut session = session;
                let mut current = session();
                auth::run_logout(api.as_ref(), &mut current).await;
                session.set(current);
            });
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-login",
            h1 { {t!("login-title")} }
            p { {t!("login-intro")} }

            if let Some(user) = snapshot.user.as_ref() {
                div { class: "login__signed-in",
                    p { {t!("login-signed-in", email = user.email.clone())} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: busy,
                        onclick: on_logout,
                        {t!("login-logout")}
                    }
                }
            } else {
                form { class: "login__form", onsubmit: on_submit,
                    label { r#for: "login-email", {t!("login-email-label")} }
                    input {
                        id: "login-email",
                        r#type: "email",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }

                    label { r#for: "login-password", {t!("login-password-label")} }
                    input {
                        id: "login-password",
                        r#type: "password",
                        value: "{password()}",
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: busy,
                        if busy { {t!("login-busy")} } else { {t!("login-submit")} }
                    }
                }

                // The server's message, verbatim.
                if let Some(error) = snapshot.error.as_ref() {
                    div { class: "login__error", "{error}" }
                }
            }
        }
    }
}
