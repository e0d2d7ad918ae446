pub mod pool;

pub use pool::{create_pool, init_store};
