pub mod commands;
pub mod error;

pub use error::{AdminError, Result};
