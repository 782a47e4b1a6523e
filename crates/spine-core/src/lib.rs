pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SpineError};
pub use tolerance::Tolerance;
