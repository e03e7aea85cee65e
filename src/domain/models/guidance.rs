//! Fixed texts: the classification prompt, the example description and the
//! static reference content shown next to every analysis.

/// Instruction template prepended verbatim to the user's description.
pub const CLASSIFICATION_PROMPT: &str = "\
Infer the following information from the question below:
1. Exposure product type: choose one of drug, household-chemical, pesticide, other
2. Exposure route: choose one of oral, ocular, dermal, inhalation, other
3. Exposure product name: the specific product name

Present the results clearly separated.

Question: ";

pub const EXAMPLE_TEXT: &str = "I got a burn from ethanol wet wipes. A few days ago I was sweating \
a lot under my arms, so I quickly wiped my armpits with a 75% ethanol wet wipe. The area stung \
for several days and now it has turned red, like a burn.";

pub const INPUT_HELP: &str =
    "Describe the product you were exposed to, how the exposure happened and any symptoms.";

pub const USAGE_GUIDE: &[&str] = &[
    "Describe the hazardous-substance exposure in detail",
    "Press 'Analyze'",
    "Review the AI classification",
];

pub const ANALYZED_FIELDS: &[&str] = &["Exposure product type", "Exposure route", "Exposure product name"];

pub const REMEDIATION_CHECKLIST: &[&str] = &[
    "Check that OPENAI_API_KEY is set in the environment or .env file",
    "Check that the client is up to date (rebuild with the latest release)",
    "Check that the API key is valid and has remaining quota",
];

/// One block of the first-aid guide.
#[derive(Debug, Clone, Copy)]
pub struct FirstAidSection {
    pub title: &'static str,
    pub steps: &'static [&'static str],
}

pub const FIRST_AID_WARNING: &str =
    "This is general guidance only. In a serious case call emergency services (119) immediately.";

pub const FIRST_AID_GUIDE: &[FirstAidSection] = &[
    FirstAidSection {
        title: "Skin exposure",
        steps: &[
            "Remove contaminated clothing",
            "Rinse with plenty of water for at least 15 minutes",
            "See a clinician if irritation persists",
        ],
    },
    FirstAidSection {
        title: "Eye exposure",
        steps: &[
            "Immediately flush with plenty of water for at least 15 minutes",
            "Remove contact lenses",
            "See a clinician immediately",
        ],
    },
    FirstAidSection {
        title: "Oral exposure",
        steps: &[
            "If conscious, rinse the mouth with water",
            "Do not induce vomiting",
            "Call 119 or the Poison Information Center (1339) immediately",
        ],
    },
    FirstAidSection {
        title: "Inhalation exposure",
        steps: &[
            "Move to fresh air",
            "Give oxygen if breathing is difficult",
            "See a clinician immediately",
        ],
    },
];

pub const DISCLAIMER: &str = "This service is an AI-based analysis and does not replace medical \
advice. In an emergency contact 119 or the Poison Information Center (1339).";

/// Concatenates the instruction template with the raw user text.
pub fn build_prompt(user_text: &str) -> String {
    format!("{CLASSIFICATION_PROMPT}{user_text}")
}

/// Plain-text rendering of the first-aid guide, used by the CLI surfaces.
pub fn first_aid_text() -> String {
    let mut out = format!("{FIRST_AID_WARNING}\n");
    for section in FIRST_AID_GUIDE {
        out.push_str(&format!("\n{}:\n", section.title));
        for step in section.steps {
            out.push_str(&format!("  - {step}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_template_followed_by_raw_text() {
        let prompt = build_prompt("  bleach splashed in eye ");
        assert!(prompt.starts_with(CLASSIFICATION_PROMPT));
        assert!(prompt.ends_with("  bleach splashed in eye "));
        assert_eq!(prompt.len(), CLASSIFICATION_PROMPT.len() + "  bleach splashed in eye ".len());
    }

    #[test]
    fn prompt_names_every_closed_set_member() {
        for term in [
            "drug",
            "household-chemical",
            "pesticide",
            "oral",
            "ocular",
            "dermal",
            "inhalation",
            "other",
        ] {
            assert!(CLASSIFICATION_PROMPT.contains(term), "missing {term}");
        }
    }

    #[test]
    fn first_aid_text_covers_all_routes() {
        let text = first_aid_text();
        for section in FIRST_AID_GUIDE {
            assert!(text.contains(section.title));
        }
        assert_eq!(FIRST_AID_GUIDE.len(), 4);
    }
}
