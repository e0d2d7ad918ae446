use crate::dto::quiz_dto::QuizResultInput;
use crate::error::Result;
use crate::models::quiz_result::QuizResult;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct QuizService {
    pool: SqlitePool,
}

impl QuizService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stores one submission and returns the committed row, including the
    /// store-assigned `id` and `timestamp`. The transaction rolls back if it
    /// is dropped before `commit`.
    pub async fn insert_quiz_result(&self, input: QuizResultInput) -> Result<QuizResult> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, QuizResult>(
            r#"
            INSERT INTO quiz_results (lab_id, score)
            VALUES (?, ?)
            RETURNING id, lab_id, score, timestamp
            "#,
        )
        .bind(input.lab_id)
        .bind(input.score)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id = row.id, lab_id = row.lab_id, "Quiz result stored");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::{create_pool, init_store};
    use chrono::Utc;
    use tokio_test::assert_ok;

    async fn setup_test_db() -> (tempfile::TempDir, SqlitePool) {
        let dir = tempfile::tempdir().expect("temp dir");
        let url = format!("sqlite://{}", dir.path().join("quiz_results.db").display());
        let pool = create_pool(&Config::for_database(url))
            .await
            .expect("Failed to create test pool");
        init_store(&pool).await.expect("Failed to init store");
        (dir, pool)
    }

    #[tokio::test]
    async fn insert_echoes_input_and_assigns_id_and_timestamp() {
        let (_dir, pool) = setup_test_db().await;
        let service = QuizService::new(pool);

        let before = Utc::now();
        let saved = assert_ok!(
            service
                .insert_quiz_result(QuizResultInput { lab_id: 2, score: 85 })
                .await
        );

        assert_eq!(saved.lab_id, 2);
        assert_eq!(saved.score, 85);
        assert!(saved.id >= 1);
        let drift = (saved.timestamp - before).num_seconds().abs();
        assert!(drift <= 5, "timestamp {} too far from {}", saved.timestamp, before);
    }

    #[tokio::test]
    async fn ids_strictly_increase() {
        let (_dir, pool) = setup_test_db().await;
        let service = QuizService::new(pool);

        let mut last = 0;
        for score in [10, -5, 1_000_000] {
            let saved = service
                .insert_quiz_result(QuizResultInput { lab_id: 99, score })
                .await
                .unwrap();
            assert!(saved.id > last);
            assert_eq!(saved.score, score);
            last = saved.id;
        }
    }

    #[tokio::test]
    async fn concurrent_inserts_get_unique_ids() {
        let (_dir, pool) = setup_test_db().await;
        let service = QuizService::new(pool.clone());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let svc = service.clone();
                tokio::spawn(async move {
                    svc.insert_quiz_result(QuizResultInput { lab_id: 1, score: i })
                        .await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quiz_results")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 8);
    }

    #[tokio::test]
    async fn insert_fails_when_pool_is_closed() {
        let (_dir, pool) = setup_test_db().await;
        let service = QuizService::new(pool.clone());
        pool.close().await;

        let result = service
            .insert_quiz_result(QuizResultInput { lab_id: 1, score: 1 })
            .await;
        assert!(matches!(result, Err(crate::error::Error::Database(_))));
    }
}
