// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic invoke seam and its completion handle.

use std::fmt;
use std::sync::Arc;

use launchnav_core::error::{LaunchNavError, Result};
use serde_json::Value;

/// What the native layer eventually answers with.
pub type BridgeResult = Result<Value>;

type Callback = Box<dyn FnOnce(BridgeResult) + Send>;

/// One-shot continuation handed to the native layer with every call.
///
/// Consuming methods guarantee a call completes at most once. A completion
/// dropped without an answer resolves as [`LaunchNavError::BridgeDisconnected`],
/// so every call also completes at least once.
pub struct Completion {
    callback: Option<Callback>,
}

impl Completion {
    pub fn new(callback: impl FnOnce(BridgeResult) + Send + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// A completion nobody listens to.
    pub fn detached() -> Self {
        Self { callback: None }
    }

    pub fn complete(mut self, result: BridgeResult) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }

    pub fn succeed(self, value: Value) {
        self.complete(Ok(value));
    }

    /// Report a native failure. The message reaches the caller unchanged.
    pub fn fail(self, message: impl Into<String>) {
        self.complete(Err(LaunchNavError::Native(message.into())));
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            tracing::warn!("native call dropped without completing");
            callback(Err(LaunchNavError::BridgeDisconnected));
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

/// Generic asynchronous dispatch into platform-native code.
///
/// `exec` must return without blocking. The implementation owns the
/// completion from then on and answers it on whatever thread it likes.
pub trait NativeInvoke: Send + Sync {
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;

    fn exec(&self, service: &str, action: &str, args: Vec<Value>, completion: Completion);
}

impl<T: NativeInvoke + ?Sized> NativeInvoke for Arc<T> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }

    fn exec(&self, service: &str, action: &str, args: Vec<Value>, completion: Completion) {
        (**self).exec(service, action, args, completion)
    }
}

impl<T: NativeInvoke + ?Sized> NativeInvoke for Box<T> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }

    fn exec(&self, service: &str, action: &str, args: Vec<Value>, completion: Completion) {
        (**self).exec(service, action, args, completion)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<BridgeResult>>>, Completion) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let completion = Completion::new(move |r| sink.lock().unwrap().push(r));
        (seen, completion)
    }

    #[test]
    fn succeed_delivers_value_once() {
        let (seen, completion) = recorder();
        completion.succeed(Value::Bool(true));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].as_ref().unwrap(), &Value::Bool(true));
    }

    #[test]
    fn fail_wraps_message_verbatim() {
        let (seen, completion) = recorder();
        completion.fail("Google Maps is not installed");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let err = seen[0].as_ref().unwrap_err();
        assert_eq!(err.to_string(), "Google Maps is not installed");
    }

    #[test]
    fn dropping_resolves_as_disconnected() {
        let (seen, completion) = recorder();
        drop(completion);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], Err(LaunchNavError::BridgeDisconnected)));
    }

    #[test]
    fn detached_completion_is_silent() {
        Completion::detached().succeed(Value::Null);
        drop(Completion::detached());
    }
}
