// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Caller-facing options for a navigation request.

use std::fmt;

use launchnav_core::Location;
use serde::Deserialize;

/// Called once the native layer reports the app was launched.
pub type SuccessCallback = Box<dyn FnOnce() + Send>;

/// Called with a human-readable message when the request fails.
pub type ErrorCallback = Box<dyn FnOnce(String) + Send>;

/// Options for [`crate::LaunchNavigator::navigate`].
///
/// Everything is optional. Unset fields fall back to the navigator's
/// [`launchnav_core::NavigatorConfig`]. `app` and `transport_mode` stay as
/// text until validation so that unknown values can be reported rather than
/// rejected at deserialization.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigateOptions {
    #[serde(skip)]
    pub success_callback: Option<SuccessCallback>,
    #[serde(skip)]
    pub error_callback: Option<ErrorCallback>,
    /// Wire identifier of the app to launch, e.g. `"google_maps"`.
    pub app: Option<String>,
    /// Label shown for the destination, e.g. "Bob's House".
    pub destination_name: Option<String>,
    /// Start point. Absent means the device's current position.
    pub start: Option<Location>,
    pub start_name: Option<String>,
    /// `driving`, `walking`, `bicycling` or `transit`.
    pub transport_mode: Option<String>,
    pub enable_debug: Option<bool>,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app(mut self, app: impl ToString) -> Self {
        self.app = Some(app.to_string());
        self
    }

    pub fn destination_name(mut self, name: impl Into<String>) -> Self {
        self.destination_name = Some(name.into());
        self
    }

    pub fn start(mut self, start: impl Into<Location>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn start_name(mut self, name: impl Into<String>) -> Self {
        self.start_name = Some(name.into());
        self
    }

    pub fn transport_mode(mut self, mode: impl ToString) -> Self {
        self.transport_mode = Some(mode.to_string());
        self
    }

    pub fn enable_debug(mut self, enabled: bool) -> Self {
        self.enable_debug = Some(enabled);
        self
    }

    pub fn on_success(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.success_callback = Some(Box::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl FnOnce(String) + Send + 'static) -> Self {
        self.error_callback = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for NavigateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigateOptions")
            .field("success_callback", &self.success_callback.is_some())
            .field("error_callback", &self.error_callback.is_some())
            .field("app", &self.app)
            .field("destination_name", &self.destination_name)
            .field("start", &self.start)
            .field("start_name", &self.start_name)
            .field("transport_mode", &self.transport_mode)
            .field("enable_debug", &self.enable_debug)
            .finish()
    }
}
