pub mod engine;
pub mod transcript;
