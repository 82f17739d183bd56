//! dochead - render document heads from JSON configuration.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};
