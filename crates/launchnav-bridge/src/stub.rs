// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where no native navigation layer exists.
//
// Every call completes with `PlatformUnavailable`. Hosts embedding the
// navigator on iOS or Android supply their own `NativeInvoke`.

use launchnav_core::error::LaunchNavError;
use serde_json::Value;

use crate::traits::{Completion, NativeInvoke};

/// No-op bridge used off-device.
pub struct StubBridge;

impl NativeInvoke for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn exec(&self, service: &str, action: &str, _args: Vec<Value>, completion: Completion) {
        tracing::warn!(service, action, "NativeInvoke::exec called on stub bridge");
        completion.complete(Err(LaunchNavError::PlatformUnavailable));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn every_call_is_unavailable() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        StubBridge.exec(
            crate::SERVICE,
            crate::action::AVAILABLE_APPS,
            Vec::new(),
            Completion::new(move |r| *sink.lock().unwrap() = Some(r)),
        );

        let seen = seen.lock().unwrap();
        assert!(matches!(*seen, Some(Err(LaunchNavError::PlatformUnavailable))));
    }
}
