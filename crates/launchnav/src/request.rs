// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// A navigation request that has passed validation.

use launchnav_core::{AppId, NormalizedLocation, RequestId, TransportMode};
use serde_json::Value;

/// Validated, normalized request. Only ever built by the navigator.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub id: RequestId,
    pub destination: NormalizedLocation,
    pub destination_name: Option<String>,
    pub start: NormalizedLocation,
    pub start_name: Option<String>,
    /// Never `AppId::UserSelect`.
    pub app: AppId,
    pub transport_mode: TransportMode,
    pub enable_debug: bool,
}

impl NavigationRequest {
    /// Positional arguments for the native `navigate` action.
    ///
    /// Order is fixed: destination value, destination kind, destination
    /// name, start value, start kind, start name, app, transport mode, debug.
    pub fn native_args(&self) -> Vec<Value> {
        vec![
            Value::from(self.destination.value.as_str()),
            Value::from(self.destination.kind.as_str()),
            self.destination_name.as_deref().map_or(Value::Null, Value::from),
            Value::from(self.start.value.as_str()),
            Value::from(self.start.kind.as_str()),
            self.start_name.as_deref().map_or(Value::Null, Value::from),
            Value::from(self.app.as_str()),
            Value::from(self.transport_mode.as_str()),
            Value::Bool(self.enable_debug),
        ]
    }
}

#[cfg(test)]
mod tests {
    use launchnav_core::LocationKind;
    use serde_json::json;

    use super::*;

    #[test]
    fn native_args_keep_fixed_order() {
        let request = NavigationRequest {
            id: RequestId::new(),
            destination: NormalizedLocation {
                value: "London".into(),
                kind: LocationKind::Name,
            },
            destination_name: Some("Big Smoke".into()),
            start: NormalizedLocation::none(),
            start_name: None,
            app: AppId::Waze,
            transport_mode: TransportMode::Walking,
            enable_debug: true,
        };

        assert_eq!(
            Value::Array(request.native_args()),
            json!(["London", "name", "Big Smoke", "", "none", null, "waze", "walking", true])
        );
    }
}
