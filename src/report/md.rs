use crate::merge::MergeOutcome;
use crate::types::catalog::Assessment;
use crate::types::report::{HistoryReport, MergeSummary};

pub fn merge_to_markdown(summary: &MergeSummary) -> String {
    let mut output = String::new();
    output.push_str("# Score Merge\n\n");
    output.push_str(&format!("- score file: {}\n", summary.score_file));
    output.push_str(&format!("- catalog: {}\n", summary.catalog));
    output.push_str(&format!(
        "- output: {}\n",
        summary.output.as_deref().unwrap_or("(dry run, not written)")
    ));
    output.push_str(&format!(
        "- pillar: {}\n\n",
        summary.pillar_id.as_deref().unwrap_or("unknown")
    ));

    match &summary.outcome {
        MergeOutcome::Appended {
            product,
            assessment,
        } => {
            output.push_str(&format!("## Appended to {product}\n\n"));
            push_assessment(&mut output, assessment);
        }
        MergeOutcome::NoMatch { product } => {
            output.push_str(&format!(
                "## No match\n\n- no product named '{product}'; catalog unchanged\n"
            ));
        }
    }

    output
}

pub fn history_to_markdown(history: &HistoryReport<'_>) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Assessments: {}\n\n", history.product));
    if history.assessments.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for assessment in history.assessments {
        push_assessment(&mut output, assessment);
    }
    output
}

fn push_assessment(output: &mut String, assessment: &Assessment) {
    let scores = assessment
        .scores
        .iter()
        .map(|pillar| format!("{}={}", pillar.pillar_id, pillar.score))
        .collect::<Vec<_>>()
        .join(" ");
    output.push_str(&format!(
        "- {} ({}): overall {} [{}]\n",
        assessment.id, assessment.date, assessment.overall_score, scores
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::{PillarScore, Product};
    use serde_json::Map;

    fn assessment() -> Assessment {
        Assessment {
            id: "a2".to_string(),
            date: "2025-05-20".to_string(),
            scores: vec![PillarScore::new("p1", 90), PillarScore::new("p2", 70)],
            overall_score: 71,
            extra: Map::new(),
        }
    }

    #[test]
    fn merge_markdown_lists_new_assessment() {
        let summary = MergeSummary {
            score_file: "score.json".to_string(),
            catalog: "products.json".to_string(),
            output: Some("products_updated.json".to_string()),
            pillar_id: Some("p1".to_string()),
            outcome: MergeOutcome::Appended {
                product: "X".to_string(),
                assessment: assessment(),
            },
        };

        let rendered = merge_to_markdown(&summary);
        assert!(rendered.contains("# Score Merge"));
        assert!(rendered.contains("## Appended to X"));
        assert!(rendered.contains("- a2 (2025-05-20): overall 71 [p1=90 p2=70]"));
    }

    #[test]
    fn merge_markdown_marks_dry_run_and_no_match() {
        let summary = MergeSummary {
            score_file: "score.json".to_string(),
            catalog: "products.json".to_string(),
            output: None,
            pillar_id: None,
            outcome: MergeOutcome::NoMatch {
                product: "Y".to_string(),
            },
        };

        let rendered = merge_to_markdown(&summary);
        assert!(rendered.contains("(dry run, not written)"));
        assert!(rendered.contains("no product named 'Y'"));
    }

    #[test]
    fn history_markdown_lists_every_assessment() {
        let product = Product {
            name: "X".to_string(),
            assessments: vec![assessment(), assessment()],
            extra: Map::new(),
        };

        let rendered = history_to_markdown(&HistoryReport::from(&product));
        assert!(rendered.starts_with("# Assessments: X"));
        assert_eq!(rendered.matches("- a2 (2025-05-20)").count(), 2);
    }
}
