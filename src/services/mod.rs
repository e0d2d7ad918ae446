pub mod ai_service;
pub mod explanation_service;
pub mod quiz_service;
