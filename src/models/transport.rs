//! Transport modes and their per-kilometer pricing

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::PlannerError;

/// How the travelers get from one stop to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Train,
    Bus,
    Plane,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Plane,
    ];

    /// Stable identifier used by the API and the CLI
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Plane => "plane",
        }
    }

    /// Display name shown next to the transport cost
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TransportMode::Car => "🚗 Кола",
            TransportMode::Train => "🚆 Влак",
            TransportMode::Bus => "🚌 Автобус",
            TransportMode::Plane => "✈️ Самолет",
        }
    }

    /// Selector label without the pictogram
    #[must_use]
    pub fn local_name(self) -> &'static str {
        match self {
            TransportMode::Car => "Кола",
            TransportMode::Train => "Влак",
            TransportMode::Bus => "Автобус",
            TransportMode::Plane => "Самолет",
        }
    }

    /// Cost in currency units per distance unit
    #[must_use]
    pub fn rate_per_km(self) -> f64 {
        match self {
            TransportMode::Car => 0.25,
            TransportMode::Train => 0.18,
            TransportMode::Bus => 0.12,
            TransportMode::Plane => 0.45,
        }
    }

    /// Cost of covering `distance`, unrounded
    #[must_use]
    pub fn travel_cost(self, distance: f64) -> f64 {
        distance * self.rate_per_km()
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransportMode {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        TransportMode::ALL
            .into_iter()
            .find(|mode| {
                mode.id().eq_ignore_ascii_case(key) || mode.local_name() == key || mode.name() == key
            })
            .ok_or_else(|| {
                PlannerError::invalid_input(format!(
                    "Unknown transport '{key}'. Must be one of: car, train, bus, plane"
                ))
            })
    }
}
