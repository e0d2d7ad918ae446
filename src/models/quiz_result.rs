use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `quiz_results`. `id` and `timestamp` are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizResult {
    pub id: i64,
    pub lab_id: i64,
    pub score: i64,
    pub timestamp: DateTime<Utc>,
}
