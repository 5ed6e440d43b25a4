pub mod entity;
pub mod oneinch;
pub mod utils;

// Re-export commonly used items
pub use entity::*;
pub use oneinch::*;
pub use utils::*;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
