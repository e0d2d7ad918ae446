pub mod common_dto;
pub mod image_dto;
pub mod quiz_dto;
