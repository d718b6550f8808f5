// Core modules
pub mod client;
pub mod config;
pub mod state;
pub mod templates;
pub mod types;
pub mod upstream;
pub mod web;

// Re-exports
pub use state::AppState;
pub use templates::TemplateEngine;
pub use upstream::UpstreamClient;
