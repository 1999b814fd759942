pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod filters;
pub mod fixtures;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod repositories;
pub mod session;
pub mod stats;

pub use client::ApiClient;
pub use config::Config;
pub use error::{AppError, Result};
pub use session::SessionStore;
