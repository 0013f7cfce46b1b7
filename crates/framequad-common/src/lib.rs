pub mod errors;
pub mod types;

pub use errors::{ConfigError, FramequadError};
pub use types::{Rect, Size};

pub type Result<T> = std::result::Result<T, FramequadError>;
