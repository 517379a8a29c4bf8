pub mod api;
pub mod request;

pub use crate::domain::model::ApiResponse;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
