//! Upcoming item records.
//!
//! Records are plain immutable values built once per API result. Equality is
//! structural. The public JSON shape is the serde derive output below, with
//! items tagged by `"type": "event" | "launch"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dates::{self, EventDate};

/// A generic space-related occurrence (landing, spacewalk, press event...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: Option<String>,
    pub location: Option<String>,
    pub date: EventDate,
    pub description: Option<String>,
    /// Free-form type label from the API (e.g. `Press Event`).
    pub category: Option<String>,
}

/// An orbital or suborbital launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub name: Option<String>,
    /// `"{pad}, {pad location}"`, or whichever of the two is known.
    pub location: Option<String>,
    pub date: EventDate,
    pub description: Option<String>,
    /// Mission type (e.g. `Suborbital`, `Communications`).
    pub category: Option<String>,
    /// Only fetched on request; owned by this launch.
    pub vehicle: Option<Vehicle>,
}

/// Launch vehicle configuration and record.
///
/// Numbers pass through as the API reports them: masses in tonnes or kg,
/// thrust in kN, height in metres. Absent stays absent, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: Option<String>,
    pub leo_payload_capacity: Option<f64>,
    pub gto_payload_capacity: Option<f64>,
    pub liftoff_thrust: Option<f64>,
    pub liftoff_mass: Option<f64>,
    pub max_stages: Option<u32>,
    pub height: Option<f64>,
    pub successful_launch_count: Option<u32>,
    pub consecutive_successful_launch_count: Option<u32>,
    pub failed_launch_count: Option<u32>,
    #[serde(with = "dates::calendar")]
    pub maiden_flight_date: EventDate,
}

/// Discriminant for [`SpaceItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Event,
    Launch,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Launch => "launch",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the merged upcoming sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpaceItem {
    Event(Event),
    Launch(Launch),
}

impl SpaceItem {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Event(_) => ItemKind::Event,
            Self::Launch(_) => ItemKind::Launch,
        }
    }

    #[must_use]
    pub const fn date(&self) -> EventDate {
        match self {
            Self::Event(event) => event.date,
            Self::Launch(launch) => launch.date,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Event(event) => event.name.as_deref(),
            Self::Launch(launch) => launch.name.as_deref(),
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Event(event) => event.location.as_deref(),
            Self::Launch(launch) => launch.location.as_deref(),
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Event(event) => event.description.as_deref(),
            Self::Launch(launch) => launch.description.as_deref(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Event(event) => event.category.as_deref(),
            Self::Launch(launch) => launch.category.as_deref(),
        }
    }

    #[must_use]
    pub const fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            Self::Event(_) => None,
            Self::Launch(launch) => launch.vehicle.as_ref(),
        }
    }
}

impl From<Event> for SpaceItem {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

impl From<Launch> for SpaceItem {
    fn from(launch: Launch) -> Self {
        Self::Launch(launch)
    }
}
