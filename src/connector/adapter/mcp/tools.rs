use schemars::JsonSchema;
use serde::Serialize;

/// Output of the classify_exposure tool
#[derive(Debug, Serialize, JsonSchema)]
pub struct ClassificationOutput {
    /// The exposure description that was analyzed
    pub description: String,

    /// Verbatim model response: product type, exposure route and product name
    pub classification: String,

    /// Model that produced the classification
    pub model: String,
}
