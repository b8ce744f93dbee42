//! Records, catalog and configuration for the pokedex workspace.

pub mod catalog;
pub mod error;
pub mod types;

pub use error::{Error, Result};
