pub mod server;

pub mod config;
pub mod error;
pub mod state;

pub mod analytics;
pub mod booking;
pub mod chat;
pub mod community;
pub mod emergency;
pub mod fixtures;
pub mod library;
pub mod survey;

pub use crate::config::ServerConfig;
pub use crate::error::{WellnessError, WellnessResult};
pub use crate::server::Server;
pub use crate::state::AppState;
