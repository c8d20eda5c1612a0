// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Positional-argument `navigate` kept for callers of the old API.
//
// It only translates: every check happens in `LaunchNavigator::navigate`.

use launchnav_core::error::Result;
use launchnav_core::{AppId, Location};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::navigator::{Launch, LaunchNavigator};
use crate::options::{ErrorCallback, NavigateOptions, SuccessCallback};

/// Options accepted by the old `navigate` signature.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegacyOptions {
    /// Launch Google Maps instead of the platform's own maps app.
    pub prefer_google_maps: bool,
    pub transport_mode: Option<String>,
    pub enable_debug: Option<bool>,
    /// No longer honoured; start resolution belongs to the native layer.
    pub disable_auto_geolocation: bool,
    /// No longer honoured.
    pub url_scheme: Option<String>,
    /// No longer honoured.
    pub back_button_text: Option<String>,
}

impl LegacyOptions {
    /// The app the old API would have opened. Never `user_select`.
    pub fn app(&self, navigator: &LaunchNavigator) -> AppId {
        if self.prefer_google_maps {
            AppId::GoogleMaps
        } else {
            navigator.config().platform.builtin_maps_app()
        }
    }
}

impl LaunchNavigator {
    /// Deprecated positional form of [`LaunchNavigator::navigate`].
    #[deprecated(note = "use navigate(destination, NavigateOptions)")]
    pub fn navigate_legacy(
        &self,
        destination: Option<Location>,
        start: Option<Location>,
        success_callback: Option<SuccessCallback>,
        error_callback: Option<ErrorCallback>,
        options: LegacyOptions,
    ) -> Result<Launch> {
        warn!(
            "navigate() called with the deprecated positional signature; \
             support will be removed in a future version"
        );
        if options.disable_auto_geolocation
            || options.url_scheme.is_some()
            || options.back_button_text.is_some()
        {
            debug!(?options, "ignoring legacy-only navigation options");
        }

        let current = NavigateOptions {
            success_callback,
            error_callback,
            app: Some(options.app(self).to_string()),
            destination_name: None,
            start,
            start_name: None,
            transport_mode: options.transport_mode,
            enable_debug: options.enable_debug,
        };
        self.navigate(destination, current)
    }
}
