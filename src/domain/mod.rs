pub mod registry;
pub mod session;
pub mod token_format;
pub mod types;
