//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SpotlightPaths;
pub use settings::Settings;
