use dioxus::prelude::*;

use crate::wizard::WizardView;

#[component]
pub fn Complaint(on_complete: EventHandler<()>) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-complaint",
            h1 { {crate::t!("complaint-title")} }
            p { {crate::t!("complaint-intro")} }
            WizardView { flow_id: "complaint", on_complete }
        }
    }
}
