// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Launch Navigator: request normalizer.
//
// Turns loosely-typed "navigate" calls (current and legacy shapes) into the
// fixed argument list the native navigation layer expects, and answers
// availability queries through the same bridge.

pub mod legacy;
pub mod navigator;
pub mod options;
pub mod pending;
pub mod request;
pub mod selection;

pub use legacy::LegacyOptions;
pub use navigator::{Launch, LaunchNavigator};
pub use options::{ErrorCallback, NavigateOptions, SuccessCallback};
pub use pending::Pending;
pub use request::NavigationRequest;
pub use selection::{NoUserSelection, UserSelection};
