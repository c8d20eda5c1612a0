// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Launch Navigator.

use thiserror::Error;

use crate::types::Platform;

/// Top-level error type for all Launch Navigator operations.
#[derive(Debug, Error)]
pub enum LaunchNavError {
    // -- Caller input (raised before anything reaches the bridge) --
    #[error("No destination was specified")]
    MissingDestination,

    #[error("'{0}' is not a recognised navigation app")]
    InvalidApp(String),

    #[error("'{app}' is not available on {platform}")]
    AppNotOnPlatform { app: String, platform: Platform },

    #[error("'{0}' is not a recognised transport mode")]
    InvalidTransportMode(String),

    // -- Native bridge --
    /// Message reported by the native layer, passed through untouched.
    #[error("{0}")]
    Native(String),

    #[error("native bridge dropped the call without completing it")]
    BridgeDisconnected,

    #[error("unexpected response from native layer: {0}")]
    InvalidResponse(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Configuration --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LaunchNavError {
    /// True for errors caused by the caller's arguments.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingDestination
                | Self::InvalidApp(_)
                | Self::AppNotOnPlatform { .. }
                | Self::InvalidTransportMode(_)
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LaunchNavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_message_is_verbatim() {
        let err = LaunchNavError::Native("Waze is not installed".into());
        assert_eq!(err.to_string(), "Waze is not installed");
        assert!(!err.is_validation());
    }

    #[test]
    fn missing_destination_mentions_destination() {
        let err = LaunchNavError::MissingDestination;
        assert!(err.to_string().contains("destination"));
        assert!(err.is_validation());
    }

    #[test]
    fn platform_mismatch_is_validation() {
        let err = LaunchNavError::AppNotOnPlatform {
            app: "apple_maps".into(),
            platform: Platform::Android,
        };
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "'apple_maps' is not available on android");
    }
}
