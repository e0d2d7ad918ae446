pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::models::lab::{catalog, Lab};
use crate::services::{
    ai_service::ExplanationClient, explanation_service::ExplanationService,
    quiz_service::QuizService,
};
use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub labs: Arc<Vec<Lab>>,
    pub quiz_service: QuizService,
    pub explanation_service: ExplanationService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Result<Self> {
        let http_client = Client::builder().build()?;
        let explanation_service = ExplanationService::from_config(config, http_client);
        Ok(Self::with_explanation_service(pool, explanation_service))
    }

    /// State backed by an arbitrary AI client; `None` leaves `/image`
    /// unconfigured.
    pub fn with_client(
        pool: SqlitePool,
        client: Option<Arc<dyn ExplanationClient>>,
        model: impl Into<String>,
    ) -> Self {
        Self::with_explanation_service(pool, ExplanationService::new(client, model))
    }

    fn with_explanation_service(pool: SqlitePool, explanation_service: ExplanationService) -> Self {
        Self {
            quiz_service: QuizService::new(pool.clone()),
            labs: Arc::new(catalog()),
            pool,
            explanation_service,
        }
    }
}
