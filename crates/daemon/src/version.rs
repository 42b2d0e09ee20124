use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Version and build metadata, captured at compile time by `build.rs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub repo_version: String,
    pub build_profile: String,
    pub build_features: String,
    pub build_timestamp: String,
    pub rust_version: String,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        repo_version: env!("REPO_VERSION").to_string(),
        build_profile: env!("BUILD_PROFILE").to_string(),
        build_features: env!("BUILD_FEATURES").to_string(),
        build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
        rust_version: env!("RUST_VERSION").to_string(),
    }
}

impl Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "jsonstash {} ({}, {} build, features: {}, built {} with {})",
            self.version,
            self.repo_version,
            self.build_profile,
            self.build_features,
            self.build_timestamp,
            self.rust_version
        )
    }
}
