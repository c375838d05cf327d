use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::MergeOutcome;
    use crate::types::catalog::{Assessment, PillarScore};
    use crate::types::report::MergeSummary;
    use serde_json::{Map, Value};

    #[test]
    fn json_summary_flattens_outcome() {
        let summary = MergeSummary {
            score_file: "score.json".to_string(),
            catalog: "products.json".to_string(),
            output: Some("products_updated.json".to_string()),
            pillar_id: Some("p1".to_string()),
            outcome: MergeOutcome::Appended {
                product: "X".to_string(),
                assessment: Assessment {
                    id: "a2".to_string(),
                    date: "2025-05-20".to_string(),
                    scores: vec![PillarScore::new("p1", 90)],
                    overall_score: 71,
                    extra: Map::new(),
                },
            },
        };

        let rendered = to_json(&summary).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("output should be json");
        assert_eq!(value["status"], "appended");
        assert_eq!(value["product"], "X");
        assert_eq!(value["assessment"]["overallScore"], 71);
        assert_eq!(value["assessment"]["scores"][0]["pillarId"], "p1");
    }

    #[test]
    fn json_summary_reports_no_match() {
        let summary = MergeSummary {
            score_file: "score.json".to_string(),
            catalog: "products.json".to_string(),
            output: None,
            pillar_id: None,
            outcome: MergeOutcome::NoMatch {
                product: "Y".to_string(),
            },
        };

        let rendered = to_json(&summary).expect("json should serialize");
        assert!(rendered.contains("\"status\": \"no_match\""));
        assert!(rendered.contains("\"output\": null"));
    }
}
