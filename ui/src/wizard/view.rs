use dioxus::prelude::*;

use crate::i18n::tr;
use crate::t;

use super::flows;
use super::{AdvanceOutcome, FlowDef, StepKind, WizardEngine};

/// Shell around a `WizardEngine`: renders the active step, gates the
/// advance control on the step validator, and keeps the session draft in
/// step with every mutation.
///
/// The ui crate does not know the platform's route enum, so completion is
/// reported through `on_complete` and the platform page decides where to
/// navigate (the success view, in both funnels).
#[component]
pub fn WizardView(flow_id: String, on_complete: EventHandler<()>) -> Element {
    // Subscribe to the global language code (if provided) so the step
    // prompts re-render immediately on toggle.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let Some(flow) = flows::by_id(&flow_id) else {
        return rsx! {
            div { class: "wizard wizard--missing", "Unknown wizard flow: {flow_id}" }
        };
    };

    // A draft stored by an earlier visit (refresh mid-flow) is restored
    // instead of starting over.
    let engine = use_signal(move || match super::load_draft(flow) {
        Some(draft) => WizardEngine::restore(flow, draft),
        None => WizardEngine::new(flow),
    });

    let snapshot = engine();
    let step = snapshot.current_step();
    let (current, total) = snapshot.progress();
    let can_advance = snapshot.input_valid();
    let input_value = snapshot.input().to_string();
    let at_first_step = snapshot.current_index() == 0;
    let is_last = current == total;

    let control = match step.kind {
        StepKind::Choice(options) => {
            let buttons: Vec<Element> = options
                .iter()
                .map(|option| {
                    let selected = input_value == option.value;
                    let value = option.value;
                    rsx! {
                        button {
                            key: "{value}",
                            r#type: "button",
                            class: format!(
                                "wizard__option {}",
                                if selected { "wizard__option--selected" } else { "" }
                            ),
                            onclick: move |_| capture_input(engine, value.to_string()),
                            {tr(option.label_key)}
                        }
                    }
                })
                .collect();
            rsx! {
                div { class: "wizard__options", {buttons.into_iter()} }
            }
        }
        StepKind::Email => rsx! {
            input {
                r#type: "email",
                class: "wizard__input",
                value: "{input_value}",
                oninput: move |evt| capture_input(engine, evt.value()),
                onkeydown: move |evt| {
                    let key = evt.key().to_string().to_lowercase();
                    if key == "enter" {
                        evt.prevent_default();
                        advance(engine, flow, on_complete);
                    }
                },
            }
        },
        StepKind::Text => rsx! {
            textarea {
                class: "wizard__textarea",
                rows: "6",
                value: "{input_value}",
                oninput: move |evt| capture_input(engine, evt.value()),
            }
        },
        StepKind::Upload => rsx! {
            input {
                r#type: "file",
                class: "wizard__upload",
                multiple: true,
                onchange: move |evt| {
                    if let Some(file_engine) = evt.files() {
                        capture_input(engine, file_engine.files().join("\n"));
                    }
                },
            }
            p { class: "wizard__hint", {t!("wizard-upload-hint")} }
        },
    };

    let progress_current = current.to_string();
    let progress_total = total.to_string();

    rsx! {
        // Hidden marker node ensures a reactive dependency on the language signal.
        div { style: "display:none", "{_lang_marker}" }
        div { class: "wizard",
            span { class: "wizard__progress",
                {t!("wizard-progress", current = progress_current, total = progress_total)}
            }
            h2 { class: "wizard__title", {tr(step.title_key)} }
            p { class: "wizard__prompt", {tr(step.prompt_key)} }

            {control}

            div { class: "wizard__controls",
                button {
                    r#type: "button",
                    class: "wizard__back",
                    disabled: at_first_step,
                    onclick: move |_| go_back(engine),
                    {t!("wizard-back")}
                }
                if step.optional {
                    button {
                        r#type: "button",
                        class: "wizard__skip",
                        onclick: move |_| skip_step(engine, flow, on_complete),
                        {t!("wizard-skip")}
                    }
                }
                button {
                    r#type: "button",
                    class: "wizard__ok",
                    disabled: !can_advance,
                    onclick: move |_| advance(engine, flow, on_complete),
                    if is_last { {t!("wizard-submit")} } else { {t!("wizard-ok")} }
                }
            }
        }
    }
}

fn capture_input(mut engine: Signal<WizardEngine>, value: String) {
    engine.with_mut(|eng| eng.set_input(value));
    engine.with(|eng| super::store_draft(&eng.snapshot()));
}

fn advance(mut engine: Signal<WizardEngine>, flow: &'static FlowDef, on_complete: EventHandler<()>) {
    let outcome = engine.with_mut(|eng| eng.advance());
    match outcome {
        AdvanceOutcome::Completed => {
            super::clear_draft(flow.id);
            on_complete.call(());
        }
        AdvanceOutcome::Moved(_) => engine.with(|eng| super::store_draft(&eng.snapshot())),
        AdvanceOutcome::Stayed => {}
    }
}

fn go_back(mut engine: Signal<WizardEngine>) {
    let moved = engine.with_mut(|eng| eng.back());
    if moved {
        engine.with(|eng| super::store_draft(&eng.snapshot()));
    }
}

fn skip_step(mut engine: Signal<WizardEngine>, flow: &'static FlowDef, on_complete: EventHandler<()>) {
    engine.with_mut(|eng| eng.clear_input());
    advance(engine, flow, on_complete);
}
