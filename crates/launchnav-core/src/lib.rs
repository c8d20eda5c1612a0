// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Launch Navigator: Core types, location parsing and errors shared across all crates.

pub mod config;
pub mod error;
pub mod location;
pub mod types;

pub use config::NavigatorConfig;
pub use error::LaunchNavError;
pub use location::{Coordinates, Location, LocationKind, NormalizedLocation};
pub use types::*;
