use dioxus::prelude::*;

use crate::core::timing::{self, RedirectGuard, SUCCESS_REDIRECT_MS};

/// Success screen shown after a funnel submits. Auto-redirects home after a
/// fixed delay; the guard makes the redirect fire at most once and never
/// after the view has unmounted.
#[component]
pub fn Done(on_home: EventHandler<()>) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let guard = use_hook(RedirectGuard::arm);

    {
        let guard = guard.clone();
        use_future(move || {
            let guard = guard.clone();
            async move {
                timing::sleep_ms(SUCCESS_REDIRECT_MS).await;
                if guard.fire() {
                    on_home.call(());
                }
            }
        });
    }

    {
        let guard = guard.clone();
        use_drop(move || guard.cancel());
    }

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-done",
            h1 { {crate::t!("done-title")} }
            p { {crate::t!("done-body")} }
            p { class: "page-done__note", {crate::t!("done-redirect-note")} }
        }
    }
}
