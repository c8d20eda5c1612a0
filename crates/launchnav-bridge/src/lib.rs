// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Launch Navigator: native bridge abstractions.
//
// The native layer (app detection, URL schemes, intents) lives outside this
// workspace. All we see of it is a generic "invoke" call that answers later
// through a one-shot completion.

pub mod dry_run;
pub mod stub;
pub mod traits;

pub use dry_run::{Dispatch, DryRunBridge, Reply};
pub use stub::StubBridge;
pub use traits::{BridgeResult, Completion, NativeInvoke};

/// Native service that handles every call made by the navigator.
pub const SERVICE: &str = "LaunchNavigator";

/// Operation names understood by the native service.
pub mod action {
    pub const NAVIGATE: &str = "navigate";
    pub const IS_APP_AVAILABLE: &str = "isAppAvailable";
    pub const AVAILABLE_APPS: &str = "availableApps";
}
