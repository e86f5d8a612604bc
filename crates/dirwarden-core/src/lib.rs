pub mod config;
pub mod error;
pub mod home;
pub mod paths;

pub use config::{Config, ConfigPaths, GuardConfig};
pub use error::DirWardenError;
pub use home::{FixedHome, HomeLocator, SystemHome};
pub use paths::{expand_path_template, resolve_path, DenylistEntry};
