//! Static step lists for the two funnels.
//!
//! The original site grew two divergent wizard implementations (a cross-page
//! complaint flow and an inline job-posting form); both now run on the one
//! engine and differ only in these tables.

use super::{ChoiceOption, FlowDef, StepDef, StepKind};

pub const COMPLAINT: FlowDef = FlowDef {
    id: "complaint",
    steps: &[
        StepDef {
            key: "category",
            title_key: "complaint-step-category-title",
            prompt_key: "complaint-step-category-prompt",
            kind: StepKind::Choice(&[
                ChoiceOption {
                    value: "company",
                    label_key: "complaint-option-company",
                },
                ChoiceOption {
                    value: "platform",
                    label_key: "complaint-option-platform",
                },
            ]),
            optional: false,
        },
        StepDef {
            key: "email",
            title_key: "complaint-step-email-title",
            prompt_key: "complaint-step-email-prompt",
            kind: StepKind::Email,
            optional: false,
        },
        StepDef {
            key: "details",
            title_key: "complaint-step-details-title",
            prompt_key: "complaint-step-details-prompt",
            kind: StepKind::Text,
            optional: false,
        },
        StepDef {
            key: "upload",
            title_key: "complaint-step-upload-title",
            prompt_key: "complaint-step-upload-prompt",
            kind: StepKind::Upload,
            optional: true,
        },
    ],
};

pub const POST_JOB: FlowDef = FlowDef {
    id: "post-job",
    steps: &[
        StepDef {
            key: "category",
            title_key: "postjob-step-category-title",
            prompt_key: "postjob-step-category-prompt",
            kind: StepKind::Choice(&[
                ChoiceOption {
                    value: "plumbing",
                    label_key: "postjob-option-plumbing",
                },
                ChoiceOption {
                    value: "electrical",
                    label_key: "postjob-option-electrical",
                },
                ChoiceOption {
                    value: "carpentry",
                    label_key: "postjob-option-carpentry",
                },
                ChoiceOption {
                    value: "painting",
                    label_key: "postjob-option-painting",
                },
                ChoiceOption {
                    value: "other",
                    label_key: "postjob-option-other",
                },
            ]),
            optional: false,
        },
        StepDef {
            key: "details",
            title_key: "postjob-step-details-title",
            prompt_key: "postjob-step-details-prompt",
            kind: StepKind::Text,
            optional: false,
        },
        StepDef {
            key: "email",
            title_key: "postjob-step-email-title",
            prompt_key: "postjob-step-email-prompt",
            kind: StepKind::Email,
            optional: false,
        },
    ],
};

pub fn by_id(id: &str) -> Option<&'static FlowDef> {
    match id {
        "complaint" => Some(&COMPLAINT),
        "post-job" => Some(&POST_JOB),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    #[test]
    fn flow_ids_resolve() {
        assert_eq!(by_id("complaint"), Some(&COMPLAINT));
        assert_eq!(by_id("post-job"), Some(&POST_JOB));
        assert_eq!(by_id("unknown"), None);
    }

    #[test]
    fn step_keys_are_unique_within_each_flow() {
        for flow in [&COMPLAINT, &POST_JOB] {
            let mut keys: Vec<&str> = flow.steps.iter().map(|s| s.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), flow.steps.len(), "duplicate key in {}", flow.id);
        }
    }

    #[test]
    fn every_flow_label_key_has_a_translation() {
        i18n::init();
        for flow in [&COMPLAINT, &POST_JOB] {
            for step in flow.steps {
                // tr() falls back to the key itself exactly when the catalog
                // lacks it.
                assert_ne!(i18n::tr(step.title_key), step.title_key);
                assert_ne!(i18n::tr(step.prompt_key), step.prompt_key);
                if let StepKind::Choice(options) = step.kind {
                    for option in options {
                        assert_ne!(i18n::tr(option.label_key), option.label_key);
                    }
                }
            }
        }
    }

    #[test]
    fn only_the_upload_step_is_optional() {
        for flow in [&COMPLAINT, &POST_JOB] {
            for step in flow.steps {
                assert_eq!(
                    step.optional,
                    matches!(step.kind, StepKind::Upload),
                    "unexpected optional flag on {}/{}",
                    flow.id,
                    step.key
                );
            }
        }
    }
}
