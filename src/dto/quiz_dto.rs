use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::quiz_result::QuizResult;

/// Body of `POST /quiz`. Only shape is checked: scores and lab ids are
/// accepted as sent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct QuizResultInput {
    pub lab_id: i64,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResultOutput {
    pub id: i64,
    pub lab_id: i64,
    pub score: i64,
    pub timestamp: DateTime<Utc>,
}

impl From<QuizResult> for QuizResultOutput {
    fn from(r: QuizResult) -> Self {
        Self {
            id: r.id,
            lab_id: r.lab_id,
            score: r.score,
            timestamp: r.timestamp,
        }
    }
}
