// Utility modules: errors and binary encoding
pub mod encoding;
pub mod error;
