// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hand-off point for requests that ask the user to pick an app.

use launchnav_core::Location;

use crate::options::NavigateOptions;

/// Presents an app picker and re-enters `navigate` with the chosen app.
///
/// The navigator calls this instead of the native layer whenever the
/// requested app is `user_select`. It receives the request untouched.
pub trait UserSelection: Send + Sync {
    fn select(&self, destination: Option<Location>, options: NavigateOptions);
}

impl<F> UserSelection for F
where
    F: Fn(Option<Location>, NavigateOptions) + Send + Sync,
{
    fn select(&self, destination: Option<Location>, options: NavigateOptions) {
        self(destination, options)
    }
}

/// For hosts without a picker: the request fails through its error callback.
pub struct NoUserSelection;

impl UserSelection for NoUserSelection {
    fn select(&self, _destination: Option<Location>, options: NavigateOptions) {
        tracing::warn!("user selection requested but no picker is installed");
        if let Some(on_error) = options.error_callback {
            on_error("No app was chosen and no app picker is available".to_string());
        }
    }
}
