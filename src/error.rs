use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("malformed input in {source_name}: {detail}")]
    MalformedInput { source_name: String, detail: String },

    #[error(
        "index out of range: assessment {assessment} of product '{product}' has {found} pillar score(s), expected 6"
    )]
    IndexOutOfRange {
        product: String,
        assessment: String,
        found: usize,
    },

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MergeError {
    pub fn malformed(source_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
