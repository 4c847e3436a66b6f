pub mod batch;
mod client;
mod error;

pub use client::ApiClient;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
