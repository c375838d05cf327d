use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Score = i64;

/// Pillars every assessment carries a score for, in the order they are stored.
pub const PILLAR_IDS: [&str; 6] = ["p1", "p2", "p3", "p4", "p5", "p6"];

/// A single freshly computed score, as written by the assessment questionnaire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub product_name: String,
    #[serde(default)]
    pub pillar_id: Option<String>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub assessments: Vec<Assessment>,
    /// Descriptive fields (business info, lifecycle stage, ...) carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub date: String,
    pub scores: Vec<PillarScore>,
    pub overall_score: Score,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarScore {
    pub pillar_id: String,
    pub score: Score,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PillarScore {
    pub fn new(pillar_id: &str, score: Score) -> Self {
        Self {
            pillar_id: pillar_id.to_string(),
            score,
            extra: Map::new(),
        }
    }
}

impl Catalog {
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    pub fn find_product_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.name == name)
    }
}

impl Product {
    pub fn latest_assessment(&self) -> Option<&Assessment> {
        self.assessments.last()
    }

    pub fn next_assessment_id(&self) -> String {
        format!("a{}", self.assessments.len() + 1)
    }
}
