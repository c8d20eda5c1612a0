// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording bridge: logs every native call instead of performing it.
//
// Used by the `launchnav` binary to show what would cross the bridge, and by
// tests to observe dispatch counts and argument lists.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::traits::{Completion, NativeInvoke};

/// A single recorded native call.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub service: String,
    pub action: String,
    pub args: Vec<Value>,
}

/// How the dry-run bridge answers a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Succeed(Value),
    Fail(String),
    /// Keep the completion until [`DryRunBridge::take_held`] is called.
    Hold,
}

impl Default for Reply {
    fn default() -> Self {
        Self::Succeed(Value::Null)
    }
}

/// Bridge that records calls and answers them from a canned reply table.
#[derive(Default)]
pub struct DryRunBridge {
    dispatches: Mutex<Vec<Dispatch>>,
    replies: Mutex<HashMap<String, Reply>>,
    held: Mutex<Vec<Completion>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DryRunBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every future call to `action` with `reply`.
    pub fn reply_to(&self, action: &str, reply: Reply) {
        lock(&self.replies).insert(action.to_string(), reply);
    }

    /// Every call seen so far, oldest first.
    pub fn dispatches(&self) -> Vec<Dispatch> {
        lock(&self.dispatches).clone()
    }

    pub fn dispatch_count(&self) -> usize {
        lock(&self.dispatches).len()
    }

    /// Completions parked by [`Reply::Hold`], handed over to the caller.
    pub fn take_held(&self) -> Vec<Completion> {
        std::mem::take(&mut *lock(&self.held))
    }
}

impl NativeInvoke for DryRunBridge {
    fn platform_name(&self) -> &str {
        "Dry run"
    }

    fn exec(&self, service: &str, action: &str, args: Vec<Value>, completion: Completion) {
        let args_json = Value::Array(args.clone());
        tracing::info!(service, action, args = %args_json, "dry run: native call");

        lock(&self.dispatches).push(Dispatch {
            service: service.to_string(),
            action: action.to_string(),
            args,
        });

        let reply = lock(&self.replies).get(action).cloned().unwrap_or_default();
        match reply {
            Reply::Succeed(value) => completion.succeed(value),
            Reply::Fail(message) => completion.fail(message),
            Reply::Hold => lock(&self.held).push(completion),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use launchnav_core::LaunchNavError;

    use super::*;
    use crate::traits::BridgeResult;

    fn capture() -> (Arc<Mutex<Vec<BridgeResult>>>, Completion) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, Completion::new(move |r| sink.lock().unwrap().push(r)))
    }

    #[test]
    fn records_calls_in_order() {
        let bridge = DryRunBridge::new();
        bridge.exec("svc", "a", vec![Value::from(1)], Completion::detached());
        bridge.exec("svc", "b", Vec::new(), Completion::detached());

        let calls = bridge.dispatches();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].action, "a");
        assert_eq!(calls[0].args, vec![Value::from(1)]);
        assert_eq!(calls[1].action, "b");
    }

    #[test]
    fn default_reply_is_null_success() {
        let bridge = DryRunBridge::new();
        let (seen, completion) = capture();
        bridge.exec("svc", "x", Vec::new(), completion);

        assert_eq!(seen.lock().unwrap()[0].as_ref().unwrap(), &Value::Null);
    }

    #[test]
    fn canned_failure_is_native_error() {
        let bridge = DryRunBridge::new();
        bridge.reply_to("x", Reply::Fail("boom".into()));
        let (seen, completion) = capture();
        bridge.exec("svc", "x", Vec::new(), completion);

        let seen = seen.lock().unwrap();
        assert!(matches!(&seen[0], Err(LaunchNavError::Native(m)) if m == "boom"));
    }

    #[test]
    fn held_completions_wait_for_the_test() {
        let bridge = DryRunBridge::new();
        bridge.reply_to("x", Reply::Hold);
        let (seen, completion) = capture();
        bridge.exec("svc", "x", Vec::new(), completion);
        assert!(seen.lock().unwrap().is_empty());

        for held in bridge.take_held() {
            held.succeed(Value::Bool(false));
        }
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(bridge.take_held().is_empty());
    }
}
