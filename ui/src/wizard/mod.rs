//! The multi-step form engine behind the complaint and job-posting funnels.
//!
//! One explicit state machine owns the whole flow: the ordered step list, the
//! captured field values, and the guarded forward transition. Step views
//! render from it and feed input back into it; they never hold flow state of
//! their own. The in-flight draft persists to the session-scoped store, so a
//! refresh mid-flow restores every answer instead of silently discarding
//! them.
//!
//! Transitions:
//! - `advance()` moves forward only when the current step's input passes its
//!   validator; on the terminal step it completes the flow instead.
//! - `back()` moves backward and keeps all captured fields.
//! - `Submitted` is terminal; no transition leaves it.

pub mod flows;

mod view;
pub use view::WizardView;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::storage;

/// Input control class of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Pick exactly one of the listed options.
    Choice(&'static [ChoiceOption]),
    Email,
    Text,
    /// File attachment names; the flows mark this step optional.
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stable value stored in the field map.
    pub value: &'static str,
    /// Translation key for the option label.
    pub label_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDef {
    /// Stable key the captured value is stored under.
    pub key: &'static str,
    pub title_key: &'static str,
    pub prompt_key: &'static str,
    pub kind: StepKind,
    /// Optional steps validate unconditionally (skippable).
    pub optional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowDef {
    pub id: &'static str,
    pub steps: &'static [StepDef],
}

impl FlowDef {
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }
}

/// Serializable snapshot of an in-flight wizard, for the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardDraft {
    pub flow: String,
    pub step: usize,
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    InProgress,
    Submitted,
}

/// Result of an `advance()` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Validation rejected the input; still on the same step.
    Stayed,
    /// Moved to the step at this index.
    Moved(usize),
    /// Terminal step confirmed; the flow is submitted.
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardEngine {
    flow: &'static FlowDef,
    current: usize,
    fields: BTreeMap<String, String>,
    phase: WizardPhase,
}

impl WizardEngine {
    pub fn new(flow: &'static FlowDef) -> Self {
        debug_assert!(!flow.steps.is_empty(), "a flow needs at least one step");
        Self {
            flow,
            current: 0,
            fields: BTreeMap::new(),
            phase: WizardPhase::InProgress,
        }
    }

    /// Rebuild an engine from a stored draft. A draft from another flow is
    /// ignored, an out-of-range step index is clamped, and fields that no
    /// longer match a step key are dropped.
    pub fn restore(flow: &'static FlowDef, draft: WizardDraft) -> Self {
        if draft.flow != flow.id {
            return Self::new(flow);
        }
        let fields: BTreeMap<String, String> = draft
            .fields
            .into_iter()
            .filter(|(key, _)| flow.steps.iter().any(|step| step.key == key))
            .collect();
        Self {
            flow,
            current: draft.step.min(flow.steps.len() - 1),
            fields,
            phase: WizardPhase::InProgress,
        }
    }

    pub fn flow(&self) -> &'static FlowDef {
        self.flow
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static StepDef {
        &self.flow.steps[self.current]
    }

    /// 1-based step counter for display.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.flow.steps.len())
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Raw value of the current step ("" until something is captured).
    pub fn input(&self) -> &str {
        self.value(self.current_step().key).unwrap_or("")
    }

    pub fn set_input<V: Into<String>>(&mut self, value: V) {
        if self.phase == WizardPhase::Submitted {
            return;
        }
        let key = self.current_step().key.to_string();
        self.fields.insert(key, value.into());
    }

    /// Clear the current step's value (skip affordance on optional steps).
    pub fn clear_input(&mut self) {
        let key = self.current_step().key;
        self.fields.remove(key);
    }

    /// Per-step gate for the advance control.
    pub fn input_valid(&self) -> bool {
        step_input_valid(self.current_step(), self.input())
    }

    /// Guarded forward transition.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.phase == WizardPhase::Submitted || !self.input_valid() {
            return AdvanceOutcome::Stayed;
        }
        if self.current + 1 == self.flow.steps.len() {
            self.phase = WizardPhase::Submitted;
            return AdvanceOutcome::Completed;
        }
        self.current += 1;
        AdvanceOutcome::Moved(self.current)
    }

    /// Backward transition; captured fields stay put.
    pub fn back(&mut self) -> bool {
        if self.phase == WizardPhase::Submitted || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn snapshot(&self) -> WizardDraft {
        WizardDraft {
            flow: self.flow.id.to_string(),
            step: self.current,
            fields: self.fields.clone(),
        }
    }
}

/// Pure per-step validator: the "can advance" predicate.
pub fn step_input_valid(step: &StepDef, raw: &str) -> bool {
    if step.optional {
        return true;
    }
    match step.kind {
        StepKind::Email => plausible_email(raw),
        StepKind::Choice(options) => options.iter().any(|option| option.value == raw.trim()),
        StepKind::Text | StepKind::Upload => !raw.trim().is_empty(),
    }
}

/// Syntactic plausibility only; the address is never verified client-side.
pub fn plausible_email(raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Draft persistence (session scope, best-effort)
// ---------------------------------------------------------------------------

fn draft_key(flow_id: &str) -> String {
    format!("verki.wizard.{flow_id}")
}

pub fn load_draft(flow: &FlowDef) -> Option<WizardDraft> {
    match storage::session_read::<WizardDraft>(&draft_key(flow.id)) {
        Ok(draft) => draft,
        Err(err) => {
            debug_log(&format!("draft load failed for {}: {err}", flow.id));
            None
        }
    }
}

pub fn store_draft(draft: &WizardDraft) {
    if let Err(err) = storage::session_write(&draft_key(&draft.flow), draft) {
        debug_log(&format!("draft store failed for {}: {err}", draft.flow));
    }
}

pub fn clear_draft(flow_id: &str) {
    if let Err(err) = storage::session_remove(&draft_key(flow_id)) {
        debug_log(&format!("draft clear failed for {flow_id}: {err}"));
    }
}

#[allow(unused_variables)]
fn debug_log(message: &str) {
    #[cfg(debug_assertions)]
    eprintln!("[wizard] {message}");
}

#[cfg(test)]
mod tests {
    use super::flows;
    use super::*;

    #[test]
    fn advance_is_a_noop_while_the_validator_rejects_the_input() {
        let mut engine = WizardEngine::new(&flows::COMPLAINT);

        assert_eq!(engine.advance(), AdvanceOutcome::Stayed);
        assert_eq!(engine.current_index(), 0);

        engine.set_input("not-one-of-the-options");
        assert_eq!(engine.advance(), AdvanceOutcome::Stayed);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn valid_input_advances_exactly_once() {
        let mut engine = WizardEngine::new(&flows::COMPLAINT);
        engine.set_input("company");

        assert_eq!(engine.advance(), AdvanceOutcome::Moved(1));
        // The next step starts empty, so an immediately repeated advance
        // (double click, held Enter) cannot move again.
        assert_eq!(engine.advance(), AdvanceOutcome::Stayed);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn email_step_rejects_malformed_addresses() {
        let mut engine = WizardEngine::new(&flows::COMPLAINT);
        engine.set_input("company");
        engine.advance();

        for bad in ["", "jon", "jon@", "@example.is", "jon@@x.is", "jon @x.is", "jon@example"] {
            engine.set_input(bad);
            assert!(!engine.input_valid(), "accepted {bad:?}");
            assert_eq!(engine.advance(), AdvanceOutcome::Stayed);
        }

        engine.set_input("jon@example.is");
        assert!(engine.input_valid());
    }

    #[test]
    fn back_keeps_captured_fields() {
        let mut engine = WizardEngine::new(&flows::COMPLAINT);
        engine.set_input("company");
        engine.advance();
        engine.set_input("jon@example.is");

        assert!(engine.back());
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.input(), "company");
        assert_eq!(engine.value("email"), Some("jon@example.is"));

        // Already at the first step.
        assert!(!engine.back());
    }

    #[test]
    fn complaint_flow_end_to_end() {
        let mut engine = WizardEngine::new(&flows::COMPLAINT);

        engine.set_input("company");
        assert_eq!(engine.advance(), AdvanceOutcome::Moved(1));

        engine.set_input("jon@example.is");
        assert_eq!(engine.advance(), AdvanceOutcome::Moved(2));

        engine.set_input("Verkið var aldrei klárað og ekki svarað í síma.");
        assert_eq!(engine.advance(), AdvanceOutcome::Moved(3));

        // Upload step is optional; skipping it still submits.
        assert_eq!(engine.input(), "");
        assert!(engine.input_valid());
        assert_eq!(engine.advance(), AdvanceOutcome::Completed);

        assert!(engine.is_submitted());
        // Terminal state: nothing moves any more.
        assert_eq!(engine.advance(), AdvanceOutcome::Stayed);
        assert!(!engine.back());
    }

    #[test]
    fn post_job_flow_end_to_end() {
        let mut engine = WizardEngine::new(&flows::POST_JOB);

        engine.set_input("plumbing");
        assert_eq!(engine.advance(), AdvanceOutcome::Moved(1));
        engine.set_input("Skipta um blöndunartæki í baðherbergi.");
        assert_eq!(engine.advance(), AdvanceOutcome::Moved(2));
        engine.set_input("anna@example.is");
        assert_eq!(engine.advance(), AdvanceOutcome::Completed);
        assert!(engine.is_submitted());
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut engine = WizardEngine::new(&flows::COMPLAINT);
        engine.set_input("company");
        engine.advance();
        engine.set_input("jon@example.is");

        let restored = WizardEngine::restore(&flows::COMPLAINT, engine.snapshot());
        assert_eq!(restored.current_index(), 1);
        assert_eq!(restored.value("category"), Some("company"));
        assert_eq!(restored.input(), "jon@example.is");
    }

    #[test]
    fn restore_rejects_a_draft_from_another_flow() {
        let mut engine = WizardEngine::new(&flows::POST_JOB);
        engine.set_input("plumbing");
        let foreign = engine.snapshot();

        let restored = WizardEngine::restore(&flows::COMPLAINT, foreign);
        assert_eq!(restored.current_index(), 0);
        assert_eq!(restored.value("category"), None);
    }

    #[test]
    fn restore_clamps_an_out_of_range_step() {
        let draft = WizardDraft {
            flow: flows::COMPLAINT.id.to_string(),
            step: 99,
            fields: BTreeMap::new(),
        };
        let restored = WizardEngine::restore(&flows::COMPLAINT, draft);
        assert_eq!(
            restored.current_index(),
            flows::COMPLAINT.total_steps() - 1
        );
    }

    #[test]
    fn restore_drops_fields_without_a_matching_step() {
        let mut fields = BTreeMap::new();
        fields.insert("category".to_string(), "company".to_string());
        fields.insert("stowaway".to_string(), "x".to_string());
        let draft = WizardDraft {
            flow: flows::COMPLAINT.id.to_string(),
            step: 0,
            fields,
        };
        let restored = WizardEngine::restore(&flows::COMPLAINT, draft);
        assert_eq!(restored.value("category"), Some("company"));
        assert_eq!(restored.value("stowaway"), None);
    }

    #[test]
    fn draft_persistence_survives_a_reload() {
        let mut engine = WizardEngine::new(&flows::COMPLAINT);
        engine.set_input("company");
        engine.advance();
        engine.set_input("jon@example.is");
        store_draft(&engine.snapshot());

        // A "new page load" restores the same position and data.
        let draft = load_draft(&flows::COMPLAINT).expect("draft present");
        let restored = WizardEngine::restore(&flows::COMPLAINT, draft);
        assert_eq!(restored.current_index(), 1);
        assert_eq!(restored.input(), "jon@example.is");

        clear_draft(flows::COMPLAINT.id);
        assert!(load_draft(&flows::COMPLAINT).is_none());
    }

    #[test]
    fn plausible_email_accepts_ordinary_addresses() {
        for good in ["jon@example.is", "anna.b@postur.net", "x@y.co"] {
            assert!(plausible_email(good), "rejected {good:?}");
        }
    }
}
