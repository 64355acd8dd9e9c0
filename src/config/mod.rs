//! Configuration management for seapay
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::SeapayPaths;
pub use settings::Settings;
