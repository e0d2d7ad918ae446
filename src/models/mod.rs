pub mod lab;
pub mod quiz_result;
