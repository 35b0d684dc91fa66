pub mod client;
pub mod request;

pub use crate::utils::error::Result;
pub use client::ApiClient;
pub use request::RequestSpec;
