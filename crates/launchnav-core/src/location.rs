// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Locations as callers give them, and the canonical form sent to the native layer.
//
// A caller may hand us a place name ("Buckingham Palace, London"), a
// coordinate pair ([50.1, -4.0]) or coordinates disguised as text
// ("50.1,-4.0"). The native side only wants a value string plus a kind tag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Ranges are not checked here; the native layer decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lon]
    }
}

impl fmt::Display for Coordinates {
    /// `"<lat>,<lon>"`, e.g. `50.1,-4.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_degrees(self.lat), format_degrees(self.lon))
    }
}

/// Shortest decimal text that round-trips, always with a fractional digit.
fn format_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// A destination or start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Coordinates(Coordinates),
    Name(String),
}

impl Location {
    /// Empty names count as "no location".
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Name(name) if name.is_empty())
    }

    /// Canonical form for the native bridge.
    pub fn normalize(&self) -> NormalizedLocation {
        let coords = match self {
            Self::Coordinates(c) => *c,
            Self::Name(name) => match parse_pair(name) {
                Some(c) => c,
                None => {
                    return NormalizedLocation {
                        value: name.clone(),
                        kind: LocationKind::Name,
                    };
                }
            },
        };

        NormalizedLocation {
            value: coords.to_string(),
            kind: LocationKind::Coords,
        }
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<[f64; 2]> for Location {
    fn from(pair: [f64; 2]) -> Self {
        Self::Coordinates(pair.into())
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::Coordinates(Coordinates::new(lat, lon))
    }
}

impl From<Coordinates> for Location {
    fn from(c: Coordinates) -> Self {
        Self::Coordinates(c)
    }
}

/// How the native side should interpret a location value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Coords,
    Name,
    /// No location given: the native layer resolves the current position.
    None,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coords => "coords",
            Self::Name => "name",
            Self::None => "none",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A location reduced to the value/kind pair the native layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedLocation {
    pub value: String,
    pub kind: LocationKind,
}

impl NormalizedLocation {
    pub fn none() -> Self {
        Self {
            value: String::new(),
            kind: LocationKind::None,
        }
    }
}

/// Normalize a location that may be missing.
pub fn normalize_optional(location: Option<&Location>) -> NormalizedLocation {
    match location {
        Some(loc) if !loc.is_empty() => loc.normalize(),
        _ => NormalizedLocation::none(),
    }
}

/// Interpret free text as a coordinate pair when it looks like one.
///
/// Accepts `"lat,lon"` with optional whitespace around either number and an
/// optional sign. Anything else comes back unchanged as a place name.
pub fn parse_location(text: &str) -> Location {
    parse_pair(text)
        .map(Location::Coordinates)
        .unwrap_or_else(|| Location::Name(text.to_string()))
}

fn parse_pair(text: &str) -> Option<Coordinates> {
    let (lat, lon) = text.trim().split_once(',')?;
    let lat = parse_decimal(lat)?;
    let lon = parse_decimal(lon)?;
    Some(Coordinates::new(lat, lon))
}

/// `[+-]digits[.digits]` or `[+-].digits`, finite; no exponents, no `inf`/`NaN`.
fn parse_decimal(part: &str) -> Option<f64> {
    let part = part.trim();
    let unsigned = part.strip_prefix(['+', '-']).unwrap_or(part);

    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (unsigned, ""),
    };
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !digits_only(int) || !digits_only(frac) {
        return None;
    }

    part.parse().ok().filter(|v: &f64| v.is_finite())
}
