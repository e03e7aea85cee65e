use crate::domain::guidance::{first_aid_text, ANALYZED_FIELDS, DISCLAIMER, EXAMPLE_TEXT, USAGE_GUIDE};

pub struct GuideController;

impl GuideController {
    pub fn new() -> Self {
        Self
    }

    pub fn example(&self) -> String {
        EXAMPLE_TEXT.to_string()
    }

    pub fn guide(&self) -> String {
        let mut output = "Usage Guide\n===========\n".to_string();
        for (i, step) in USAGE_GUIDE.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }
        output.push_str("\nAnalyzed fields:\n");
        for field in ANALYZED_FIELDS {
            output.push_str(&format!("  - {}\n", field));
        }
        output.push_str("\nGeneral First-Aid Guide\n=======================\n");
        output.push_str(&first_aid_text());
        output.push('\n');
        output.push_str(DISCLAIMER);
        output
    }
}

impl Default for GuideController {
    fn default() -> Self {
        Self::new()
    }
}
