pub mod billing;
pub mod config;
pub mod content;
pub mod error;
pub mod plans;

pub use config::{AppConfig, NavConfig, RevealConfig, ScrollConfig};
pub use error::{Error, Result};
