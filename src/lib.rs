pub mod api;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod download;
pub mod error;
pub mod render;
pub mod session;

pub use api::{ApiClient, JobTailorApi};
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::{DisplayState, Session};
