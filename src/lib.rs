pub mod error;
pub mod ui;
pub mod version;

pub use error::{Result, SemverToolError};
pub use version::VersionInfo;
