// quadver - four-part version identifiers
// Core library functionality

pub mod models;
pub mod utils;

// Re-export commonly used types
pub use models::version::Version;
pub use utils::encoding::VersionCodec;
pub use utils::error::{Result, VersionError};
