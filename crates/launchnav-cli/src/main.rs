// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Launch Navigator: dry-run front end.
//
// Reads a navigation request as JSON, runs it through the navigator against
// the recording bridge, and prints the argument list the native layer
// would receive.
//
//     launchnav [--config config.json] request.json
//
// request.json: { "destination": "London", "options": { "app": "waze" } }

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use launchnav::{LaunchNavigator, NavigateOptions};
use launchnav_bridge::DryRunBridge;
use launchnav_core::error::Result;
use launchnav_core::{Location, NavigatorConfig};
use serde::Deserialize;
use serde_json::Value;

const USAGE: &str = "usage: launchnav [--config <config.json>] <request.json>";

/// A navigation call as written in a request file.
#[derive(Debug, Deserialize)]
struct RequestFile {
    destination: Option<Location>,
    #[serde(default)]
    options: NavigateOptions,
}

#[derive(Debug, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    request: PathBuf,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Args> {
    let mut config = None;
    let mut request = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => config = Some(PathBuf::from(args.next()?)),
            _ if request.is_none() && !arg.starts_with('-') => request = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }
    Some(Args {
        config,
        request: request?,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args(std::env::args().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&args).await {
        Ok(Some(native_args)) => {
            println!("{native_args}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "request failed");
            ExitCode::FAILURE
        }
    }
}

/// Returns the dispatched argument list, or `None` when the request was
/// handed to user selection.
async fn run(args: &Args) -> Result<Option<Value>> {
    let config = match &args.config {
        Some(path) => NavigatorConfig::load(path)?,
        None => NavigatorConfig::default(),
    };
    let request: RequestFile = serde_json::from_str(&std::fs::read_to_string(&args.request)?)?;
    dispatch(config, request).await
}

async fn dispatch(config: NavigatorConfig, request: RequestFile) -> Result<Option<Value>> {
    let bridge = Arc::new(DryRunBridge::new());
    let platform = config.platform;
    let navigator = LaunchNavigator::new(
        config,
        Arc::clone(&bridge),
        move |_: Option<Location>, _: NavigateOptions| {
            let choices: Vec<&str> = platform.apps().iter().map(|app| app.as_str()).collect();
            tracing::info!(
                %platform,
                choices = %choices.join(", "),
                "no app chosen; set options.app to one of the choices"
            );
        },
    );
    tracing::info!(platform = %navigator.config().platform, bridge = navigator.platform_name(), "navigator ready");

    let Some(pending) = navigator
        .navigate(request.destination, request.options)?
        .into_pending()
    else {
        return Ok(None);
    };
    pending.await?;

    Ok(bridge
        .dispatches()
        .into_iter()
        .next()
        .map(|call| Value::Array(call.args)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use launchnav_core::{LaunchNavError, Platform};
    use serde_json::json;

    use super::*;

    fn args(list: &[&str]) -> Option<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_request_and_config() {
        assert_eq!(
            args(&["--config", "c.json", "r.json"]),
            Some(Args {
                config: Some("c.json".into()),
                request: "r.json".into(),
            })
        );
        assert_eq!(
            args(&["r.json"]),
            Some(Args {
                config: None,
                request: "r.json".into(),
            })
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(args(&[]), None);
        assert_eq!(args(&["--config"]), None);
        assert_eq!(args(&["a.json", "b.json"]), None);
        assert_eq!(args(&["--verbose", "r.json"]), None);
    }

    #[tokio::test]
    async fn prints_native_arguments_for_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        let request_path = dir.path().join("request.json");
        write!(
            std::fs::File::create(&config_path).unwrap(),
            r#"{{ "platform": "android" }}"#
        )
        .unwrap();
        write!(
            std::fs::File::create(&request_path).unwrap(),
            r#"{{ "destination": [50.1, -4.0], "options": {{ "app": "geo", "startName": "Home" }} }}"#
        )
        .unwrap();

        let out = run(&Args {
            config: Some(config_path),
            request: request_path,
        })
        .await
        .unwrap();

        assert_eq!(
            out,
            Some(json!(["50.1,-4.0", "coords", null, "", "none", "Home", "geo", "driving", false]))
        );
    }

    #[tokio::test]
    async fn user_selection_prints_nothing() {
        let request: RequestFile = serde_json::from_str(r#"{ "destination": "London" }"#).unwrap();
        let out = dispatch(NavigatorConfig::for_platform(Platform::Ios), request)
            .await
            .unwrap();
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn missing_destination_fails() {
        let request: RequestFile =
            serde_json::from_str(r#"{ "options": { "app": "waze" } }"#).unwrap();
        let err = dispatch(NavigatorConfig::for_platform(Platform::Ios), request)
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchNavError::MissingDestination));
    }
}
