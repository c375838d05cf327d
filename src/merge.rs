//! Appends a new assessment built from a single incoming score.
//!
//! The incoming score always lands in the `p1` slot, whatever `pillarId` the
//! record names; `p2`..`p6` are carried forward by position from the
//! product's latest assessment.

use crate::error::{MergeError, Result};
use crate::types::catalog::{
    Assessment, Catalog, PillarScore, Product, Score, ScoreRecord, PILLAR_IDS,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Map;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MergeOutcome {
    Appended {
        product: String,
        assessment: Assessment,
    },
    NoMatch {
        product: String,
    },
}

impl MergeOutcome {
    pub fn matched(&self) -> bool {
        matches!(self, Self::Appended { .. })
    }
}

/// Merges `record` into the first product whose name matches, stamping the new
/// assessment with `date`. Leaves `catalog` untouched when nothing matches.
pub fn merge_score(
    record: &ScoreRecord,
    catalog: &mut Catalog,
    date: NaiveDate,
) -> Result<MergeOutcome> {
    let Some(product) = catalog.find_product_mut(&record.product_name) else {
        tracing::info!("no product named '{}' in catalog", record.product_name);
        return Ok(MergeOutcome::NoMatch {
            product: record.product_name.clone(),
        });
    };

    let assessment = next_assessment(product, record.score, date)?;
    tracing::info!(
        "appending assessment {} to '{}' (overall {})",
        assessment.id,
        product.name,
        assessment.overall_score
    );
    product.assessments.push(assessment.clone());

    Ok(MergeOutcome::Appended {
        product: product.name.clone(),
        assessment,
    })
}

fn next_assessment(product: &Product, score: Score, date: NaiveDate) -> Result<Assessment> {
    let prior = product.latest_assessment().ok_or_else(|| {
        MergeError::malformed(
            "catalog",
            format!("product '{}' has no prior assessment", product.name),
        )
    })?;
    if prior.scores.len() < PILLAR_IDS.len() {
        return Err(MergeError::IndexOutOfRange {
            product: product.name.clone(),
            assessment: prior.id.clone(),
            found: prior.scores.len(),
        });
    }

    let scores = PILLAR_IDS
        .iter()
        .enumerate()
        .map(|(index, pillar_id)| {
            let value = if index == 0 {
                score
            } else {
                prior.scores[index].score
            };
            PillarScore::new(pillar_id, value)
        })
        .collect::<Vec<_>>();

    Ok(Assessment {
        id: product.next_assessment_id(),
        date: date.format(DATE_FORMAT).to_string(),
        overall_score: overall_score(&scores)?,
        scores,
        extra: Map::new(),
    })
}

/// Floor of the mean pillar score. Rounds toward negative infinity, not zero.
///
/// Summed in `i128` so six scores near `i64::MAX` cannot overflow.
pub fn overall_score(scores: &[PillarScore]) -> Result<Score> {
    if scores.is_empty() {
        return Ok(0);
    }
    let total: i128 = scores.iter().map(|pillar| i128::from(pillar.score)).sum();
    let mean = total.div_euclid(scores.len() as i128);
    Score::try_from(mean).map_err(|_| {
        MergeError::malformed("catalog", format!("overall score {mean} is out of range"))
    })
}
