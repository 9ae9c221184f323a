//! xcodebuild invocations.

pub mod runner;
pub mod settings;

pub use runner::{SdkDescriptor, XcodeBuild, build, parse_sdks, show_sdks};
pub use settings::{XcodeBuildSettings, XcodeSettings};
