pub mod analytics;
pub mod dashboard;
pub mod error;

pub use error::{ApiError, ApiResult};
