// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Navigator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{AppId, Platform, TransportMode};

/// Defaults applied to every navigation request that leaves a field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Platform whose native layer receives the calls. Decides which apps are valid.
    pub platform: Platform,
    /// App used when a request does not name one (default: ask the user).
    pub default_app: AppId,
    /// Transport mode used when a request does not name one.
    pub default_transport_mode: TransportMode,
    /// Ask the native layer for debug output on every request.
    pub enable_debug: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            default_app: AppId::UserSelect,
            default_transport_mode: TransportMode::Driving,
            enable_debug: false,
        }
    }
}

impl NavigatorConfig {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Default::default()
        }
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::LaunchNavError;

    #[test]
    fn defaults_prompt_the_user_and_drive() {
        let config = NavigatorConfig::default();
        assert_eq!(config.default_app, AppId::UserSelect);
        assert_eq!(config.default_transport_mode, TransportMode::Driving);
        assert!(!config.enable_debug);
    }

    #[test]
    fn load_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "platform": "android", "default_transport_mode": "walking" }}"#).unwrap();

        let config = NavigatorConfig::load(file.path()).unwrap();
        assert_eq!(config.platform, Platform::Android);
        assert_eq!(config.default_transport_mode, TransportMode::Walking);
        assert_eq!(config.default_app, AppId::UserSelect);
    }

    #[test]
    fn load_rejects_unknown_app() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_app": "not-a-real-app" }}"#).unwrap();

        let err = NavigatorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LaunchNavError::Serialization(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NavigatorConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LaunchNavError::Io(_)));
    }
}
