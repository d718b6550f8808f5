pub mod api;
pub mod message;

pub use api::{ChatRequest, ChatResponse, ErrorResponse};
pub use message::{Message, Role, Turn};
