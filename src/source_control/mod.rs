//! Source control platform detection for parsed remotes.

mod detection;

pub use detection::{detect_platform, SourceControlPlatform};
