use crate::merge::MergeOutcome;
use crate::types::catalog::{Assessment, Product};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub score_file: String,
    pub catalog: String,
    /// `None` when the run was a dry run and nothing was written.
    pub output: Option<String>,
    pub pillar_id: Option<String>,
    #[serde(flatten)]
    pub outcome: MergeOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport<'a> {
    pub product: &'a str,
    pub assessments: &'a [Assessment],
}

impl<'a> From<&'a Product> for HistoryReport<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            product: &product.name,
            assessments: &product.assessments,
        }
    }
}
