pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::request_from_args;
