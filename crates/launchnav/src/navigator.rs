// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The navigator: validates requests and dispatches them to the native layer.
//
// Validation is synchronous and happens before anything crosses the bridge.
// A rejected request reaches the caller twice: through its error callback
// (when one was given) and as the `Err` returned from the call. Native
// failures arrive later, through the callback and the `Pending` future, and
// are passed on verbatim.

use std::collections::BTreeMap;

use launchnav_bridge::{BridgeResult, Completion, NativeInvoke, SERVICE, action};
use launchnav_core::error::{LaunchNavError, Result};
use launchnav_core::location::normalize_optional;
use launchnav_core::{AppId, Location, NavigatorConfig, RequestId, TransportMode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::options::{ErrorCallback, NavigateOptions, SuccessCallback};
use crate::pending::Pending;
use crate::request::NavigationRequest;
use crate::selection::{NoUserSelection, UserSelection};

type Observer<T> = Box<dyn FnOnce(&Result<T>) + Send>;

/// What a successful `navigate` call did.
#[derive(Debug)]
pub enum Launch {
    /// Sent to the native layer; resolves when it answers.
    Dispatched(Pending<()>),
    /// Handed to the user-selection flow; nothing was dispatched.
    UserSelection,
}

impl Launch {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }

    pub fn into_pending(self) -> Option<Pending<()>> {
        match self {
            Self::Dispatched(pending) => Some(pending),
            Self::UserSelection => None,
        }
    }
}

/// Entry point for launching navigation apps.
///
/// Holds no per-request state; calls are independent and may be made from
/// any thread, including from inside a callback.
pub struct LaunchNavigator {
    config: NavigatorConfig,
    bridge: Box<dyn NativeInvoke>,
    selector: Box<dyn UserSelection>,
}

impl LaunchNavigator {
    pub fn new(
        config: NavigatorConfig,
        bridge: impl NativeInvoke + 'static,
        selector: impl UserSelection + 'static,
    ) -> Self {
        Self {
            config,
            bridge: Box::new(bridge),
            selector: Box::new(selector),
        }
    }

    /// Navigator without an app picker. Requests that need one fail.
    pub fn with_bridge(config: NavigatorConfig, bridge: impl NativeInvoke + 'static) -> Self {
        Self::new(config, bridge, NoUserSelection)
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn platform_name(&self) -> &str {
        self.bridge.platform_name()
    }

    /// Apps the configured platform can launch, `user_select` included.
    pub fn supported_apps(&self) -> &'static [AppId] {
        self.config.platform.apps()
    }

    /// Open a navigation app with directions to `destination`.
    ///
    /// A missing or empty destination is rejected first, whatever the app.
    /// With no app given (or `user_select`), the request then goes to the
    /// user-selection flow and nothing is dispatched. Otherwise exactly one
    /// native call is made, after app and transport mode have been checked.
    pub fn navigate(
        &self,
        destination: Option<Location>,
        mut options: NavigateOptions,
    ) -> Result<Launch> {
        let Some(destination) = destination.filter(|d| !d.is_empty()) else {
            return reject(LaunchNavError::MissingDestination, options.error_callback.take());
        };

        let app = options
            .app
            .take()
            .filter(|app| !app.is_empty())
            .unwrap_or_else(|| self.config.default_app.as_str().to_string());

        if app == AppId::UserSelect.as_str() {
            debug!("no app chosen, deferring to user selection");
            options.app = Some(app);
            self.selector.select(Some(destination), options);
            return Ok(Launch::UserSelection);
        }

        let success_callback = options.success_callback.take();
        let error_callback = options.error_callback.take();
        let request = match self.build_request(destination, &app, options) {
            Ok(request) => request,
            Err(err) => return reject(err, error_callback),
        };

        info!(
            request_id = %request.id,
            app = %request.app,
            transport_mode = %request.transport_mode,
            destination_kind = %request.destination.kind,
            start_kind = %request.start.kind,
            "dispatching navigation request"
        );
        let args = request.native_args();
        if request.enable_debug {
            let args_json = Value::Array(args.clone());
            info!(request_id = %request.id, args = %args_json, "native navigate arguments");
        }

        let pending = self.dispatch(
            action::NAVIGATE,
            args,
            decode_unit,
            Some(route_to_callbacks(success_callback, error_callback)),
        );
        Ok(Launch::Dispatched(pending))
    }

    /// Ask the native layer whether `app` is installed.
    ///
    /// Unknown apps are rejected before anything is dispatched.
    pub fn is_app_available(&self, app: &str) -> Result<Pending<bool>> {
        let app = self.validate_app(app)?;
        Ok(self.dispatch(
            action::IS_APP_AVAILABLE,
            vec![Value::from(app.as_str())],
            decode_bool,
            None,
        ))
    }

    /// Ask the native layer which apps are installed.
    pub fn available_apps(&self) -> Pending<BTreeMap<AppId, bool>> {
        self.dispatch(action::AVAILABLE_APPS, Vec::new(), decode_availability, None)
    }

    /// Deprecated: use [`Self::is_app_available`] with `google_maps`.
    ///
    /// Only the answer is delivered. Native failures are not reported to
    /// the caller.
    #[deprecated(note = "use is_app_available(\"google_maps\")")]
    pub fn is_google_maps_available(
        &self,
        success: impl FnOnce(bool) + Send + 'static,
    ) -> Result<()> {
        warn!(
            "is_google_maps_available() is deprecated and will be removed; \
             use is_app_available() instead"
        );
        let app = self.validate_app(AppId::GoogleMaps.as_str())?;

        let observer: Observer<bool> = Box::new(move |result: &Result<bool>| match result {
            Ok(available) => success(*available),
            Err(err) => debug!(error = %err, "google maps availability check failed"),
        });
        // The answer goes to `success`; nobody awaits the future.
        let _pending = self.dispatch(
            action::IS_APP_AVAILABLE,
            vec![Value::from(app.as_str())],
            decode_bool,
            Some(observer),
        );
        Ok(())
    }

    /// `options` arrives with its callbacks already taken.
    fn build_request(
        &self,
        destination: Location,
        app: &str,
        options: NavigateOptions,
    ) -> Result<NavigationRequest> {
        let app = self.validate_app(app)?;
        let transport_mode = match options.transport_mode.filter(|m| !m.is_empty()) {
            Some(mode) => mode.parse::<TransportMode>()?,
            None => self.config.default_transport_mode,
        };

        let request = NavigationRequest {
            id: RequestId::new(),
            destination: destination.normalize(),
            destination_name: options.destination_name,
            start: normalize_optional(options.start.as_ref()),
            start_name: options.start_name,
            app,
            transport_mode,
            enable_debug: options.enable_debug.unwrap_or(self.config.enable_debug),
        };
        debug!(?request, "normalized navigation request");
        Ok(request)
    }

    fn validate_app(&self, app: &str) -> Result<AppId> {
        let parsed = app.parse::<AppId>()?;
        if !self.config.platform.supports(parsed) {
            return Err(LaunchNavError::AppNotOnPlatform {
                app: app.to_string(),
                platform: self.config.platform,
            });
        }
        Ok(parsed)
    }

    /// Make one native call. The answer is decoded, shown to `observer`,
    /// then delivered to the returned future.
    fn dispatch<T: Send + 'static>(
        &self,
        action: &'static str,
        args: Vec<Value>,
        decode: fn(Value) -> Result<T>,
        observer: Option<Observer<T>>,
    ) -> Pending<T> {
        let (tx, pending) = Pending::channel();
        let completion = Completion::new(move |reply: BridgeResult| {
            let result = reply.and_then(decode);
            if let Some(observe) = observer {
                observe(&result);
            }
            // The caller may have dropped the future.
            let _ = tx.send(result);
        });
        self.bridge.exec(SERVICE, action, args, completion);
        pending
    }
}

/// Report a rejected request on both channels.
fn reject<T>(err: LaunchNavError, error_callback: Option<ErrorCallback>) -> Result<T> {
    warn!(error = %err, "navigation request rejected");
    if let Some(on_error) = error_callback {
        on_error(err.to_string());
    }
    Err(err)
}

fn route_to_callbacks(
    success_callback: Option<SuccessCallback>,
    error_callback: Option<ErrorCallback>,
) -> Observer<()> {
    Box::new(move |result: &Result<()>| match result {
        Ok(()) => {
            if let Some(on_success) = success_callback {
                on_success();
            }
        }
        Err(err) => {
            if let Some(on_error) = error_callback {
                on_error(err.to_string());
            }
        }
    })
}

fn decode_unit(_reply: Value) -> Result<()> {
    Ok(())
}

fn decode_bool(reply: Value) -> Result<bool> {
    match reply {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => n
            .as_f64()
            .map(|f| f != 0.0)
            .ok_or_else(|| LaunchNavError::InvalidResponse(n.to_string())),
        other => Err(LaunchNavError::InvalidResponse(other.to_string())),
    }
}

fn decode_availability(reply: Value) -> Result<BTreeMap<AppId, bool>> {
    let entries = match reply {
        Value::Object(entries) => entries,
        other => return Err(LaunchNavError::InvalidResponse(other.to_string())),
    };

    let mut apps = BTreeMap::new();
    for (name, available) in entries {
        match name.parse::<AppId>() {
            Ok(app) => {
                apps.insert(app, decode_bool(available)?);
            }
            Err(_) => warn!(app = %name, "ignoring unknown app in availability list"),
        }
    }
    Ok(apps)
}
