// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Launch Navigator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LaunchNavError;

/// Correlates the log lines of a single navigation request.
///
/// Never sent across the native bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Navigation apps known to the native layer.
///
/// The serialized form is the wire identifier the native side expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    /// Not an app: asks the user to pick one.
    UserSelect,
    /// Android `geo:` intent, handled by whatever the user has set as default.
    Geo,
    AppleMaps,
    GoogleMaps,
    Waze,
    Citymapper,
    Navigon,
    TransitApp,
    Yandex,
    Uber,
    Tomtom,
    BingMaps,
    Sygic,
    HereMaps,
    Moovit,
    Lyft,
    MapsMe,
    Cabify,
    Baidu,
    #[serde(rename = "taxis_99")]
    Taxis99,
    Gaode,
}

impl AppId {
    pub const ALL: [AppId; 21] = [
        Self::UserSelect,
        Self::Geo,
        Self::AppleMaps,
        Self::GoogleMaps,
        Self::Waze,
        Self::Citymapper,
        Self::Navigon,
        Self::TransitApp,
        Self::Yandex,
        Self::Uber,
        Self::Tomtom,
        Self::BingMaps,
        Self::Sygic,
        Self::HereMaps,
        Self::Moovit,
        Self::Lyft,
        Self::MapsMe,
        Self::Cabify,
        Self::Baidu,
        Self::Taxis99,
        Self::Gaode,
    ];

    /// Identifier passed to the native layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserSelect => "user_select",
            Self::Geo => "geo",
            Self::AppleMaps => "apple_maps",
            Self::GoogleMaps => "google_maps",
            Self::Waze => "waze",
            Self::Citymapper => "citymapper",
            Self::Navigon => "navigon",
            Self::TransitApp => "transit_app",
            Self::Yandex => "yandex",
            Self::Uber => "uber",
            Self::Tomtom => "tomtom",
            Self::BingMaps => "bing_maps",
            Self::Sygic => "sygic",
            Self::HereMaps => "here_maps",
            Self::Moovit => "moovit",
            Self::Lyft => "lyft",
            Self::MapsMe => "maps_me",
            Self::Cabify => "cabify",
            Self::Baidu => "baidu",
            Self::Taxis99 => "taxis_99",
            Self::Gaode => "gaode",
        }
    }

    /// Name to show in a picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UserSelect => "[User select]",
            Self::Geo => "[Native chooser]",
            Self::AppleMaps => "Apple Maps",
            Self::GoogleMaps => "Google Maps",
            Self::Waze => "Waze",
            Self::Citymapper => "Citymapper",
            Self::Navigon => "Navigon",
            Self::TransitApp => "Transit App",
            Self::Yandex => "Yandex Navigator",
            Self::Uber => "Uber",
            Self::Tomtom => "Tomtom",
            Self::BingMaps => "Bing Maps",
            Self::Sygic => "Sygic",
            Self::HereMaps => "HERE Maps",
            Self::Moovit => "Moovit",
            Self::Lyft => "Lyft",
            Self::MapsMe => "MAPS.ME",
            Self::Cabify => "Cabify",
            Self::Baidu => "Baidu Maps",
            Self::Taxis99 => "99 Taxi",
            Self::Gaode => "Gaode Maps (Amap)",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = LaunchNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|app| app.as_str() == s)
            .ok_or_else(|| LaunchNavError::InvalidApp(s.to_string()))
    }
}

/// Travel method used for route calculation.
///
/// Which modes a given app honours is decided natively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        Self::Driving,
        Self::Walking,
        Self::Bicycling,
        Self::Transit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = LaunchNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| LaunchNavError::InvalidTransportMode(s.to_string()))
    }
}

/// Host operating system of the native layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Android,
    Ios,
    Windows,
}

const ANDROID_APPS: &[AppId] = &[
    AppId::UserSelect,
    AppId::Geo,
    AppId::GoogleMaps,
    AppId::Citymapper,
    AppId::Uber,
    AppId::Waze,
    AppId::Yandex,
    AppId::Sygic,
    AppId::HereMaps,
    AppId::Moovit,
    AppId::Lyft,
    AppId::MapsMe,
    AppId::Cabify,
    AppId::Baidu,
    AppId::Taxis99,
    AppId::Gaode,
];

const IOS_APPS: &[AppId] = &[
    AppId::UserSelect,
    AppId::AppleMaps,
    AppId::GoogleMaps,
    AppId::Waze,
    AppId::Citymapper,
    AppId::Navigon,
    AppId::TransitApp,
    AppId::Yandex,
    AppId::Uber,
    AppId::Tomtom,
    AppId::Sygic,
    AppId::HereMaps,
    AppId::Moovit,
    AppId::Lyft,
    AppId::MapsMe,
    AppId::Cabify,
    AppId::Baidu,
    AppId::Taxis99,
    AppId::Gaode,
];

const WINDOWS_APPS: &[AppId] = &[AppId::UserSelect, AppId::BingMaps];

impl Platform {
    /// The platform this binary was compiled for. Anything that is neither
    /// Android nor Windows is treated as iOS.
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Ios
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Windows => "windows",
        }
    }

    /// Apps the native layer on this platform knows how to launch.
    pub fn apps(&self) -> &'static [AppId] {
        match self {
            Self::Android => ANDROID_APPS,
            Self::Ios => IOS_APPS,
            Self::Windows => WINDOWS_APPS,
        }
    }

    pub fn supports(&self, app: AppId) -> bool {
        self.apps().contains(&app)
    }

    /// The app that ships with the OS.
    pub fn builtin_maps_app(&self) -> AppId {
        match self {
            Self::Android => AppId::Geo,
            Self::Ios => AppId::AppleMaps,
            Self::Windows => AppId::BingMaps,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
