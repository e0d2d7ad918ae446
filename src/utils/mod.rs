pub mod extract;
pub mod image;
pub mod markdown;
