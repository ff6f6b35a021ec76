// Declare the main modules
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod layout;
pub mod password;
pub mod upload;

pub use api::client::ApiClient;
pub use error::{ApiError, UploadError};
